// tests/support/mocks/repos.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use inkpress_core::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository,
    NewCategory,
};
use inkpress_core::domain::errors::{DomainError, DomainResult};
use inkpress_core::domain::popup::{
    NewPopup, Popup, PopupId, PopupReadRepository, PopupUpdate, PopupWriteRepository,
};
use inkpress_core::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostSort, PostUpdate,
    PostWriteRepository,
};
use inkpress_core::domain::slug::Slug;

fn slug_taken() -> DomainError {
    DomainError::Conflict("slug already exists".into())
}

/* -------------------------------- posts -------------------------------- */

#[derive(Default)]
struct PostStore {
    next_id: i64,
    rows: BTreeMap<i64, Post>,
}

impl PostStore {
    fn slug_in_use(&self, slug: &Slug, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|p| &p.slug == slug && Some(p.id.0) != except)
    }

    fn insert(&mut self, post: NewPost) -> DomainResult<Post> {
        if self.slug_in_use(&post.slug, None) {
            return Err(slug_taken());
        }
        self.next_id += 1;
        let created = Post {
            id: PostId(self.next_id),
            title: post.title,
            slug: post.slug,
            image: post.image,
            excerpt: post.excerpt,
            description: post.description,
            gallery: post.gallery,
            is_featured: post.is_featured,
            map: post.map,
            category_id: post.category_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        self.rows.insert(self.next_id, created.clone());
        Ok(created)
    }
}

/// Post table kept in memory. Slugs are unique, like the real constraint.
#[derive(Default)]
pub struct InMemoryPostRepo {
    inner: Mutex<PostStore>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slugs(&self) -> Vec<String> {
        let store = self.inner.lock().unwrap();
        store.rows.values().map(|p| p.slug.to_string()).collect()
    }

    /// Inserts a row directly, bypassing the services.
    pub fn seed(&self, post: NewPost) -> Post {
        self.inner.lock().unwrap().insert(post).unwrap()
    }

    pub fn references_category(&self, id: CategoryId) -> bool {
        let store = self.inner.lock().unwrap();
        store.rows.values().any(|p| p.category_id == id)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.inner.lock().unwrap().insert(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        if store.slug_in_use(&update.slug, Some(update.id.0)) {
            return Err(slug_taken());
        }
        let row = store
            .rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        row.title = update.title;
        row.slug = update.slug;
        row.image = update.image;
        row.excerpt = update.excerpt;
        row.description = update.description;
        row.gallery = update.gallery;
        row.is_featured = update.is_featured;
        row.map = update.map;
        row.category_id = update.category_id;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<(Vec<Post>, u64)> {
        let store = self.inner.lock().unwrap();
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut matching: Vec<Post> = store
            .rows
            .values()
            .filter(|p| filter.featured.is_none_or(|f| p.is_featured == f))
            .filter(|p| filter.category_id.is_none_or(|c| p.category_id == c))
            .filter(|p| {
                needle.as_deref().is_none_or(|n| {
                    p.title.as_str().to_lowercase().contains(n)
                        || p.description.as_str().to_lowercase().contains(n)
                        || p.excerpt.as_deref().is_some_and(|e| e.to_lowercase().contains(n))
                })
            })
            .cloned()
            .collect();

        matching.sort_by_key(|p| (p.created_at, p.id.0));
        if filter.sort == PostSort::Newest {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect();
        Ok((page, total))
    }
}

/// Loses the first insert to a concurrent writer that grabs the same slug.
pub struct RacingPostRepo {
    pub inner: InMemoryPostRepo,
    raced: AtomicBool,
}

impl RacingPostRepo {
    pub fn new() -> Self {
        Self {
            inner: InMemoryPostRepo::new(),
            raced: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl PostWriteRepository for RacingPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        if !self.raced.swap(true, Ordering::SeqCst) {
            self.inner.seed(post);
            return Err(slug_taken());
        }
        self.inner.insert(post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        PostWriteRepository::delete(&self.inner, id).await
    }
}

#[async_trait]
impl PostReadRepository for RacingPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        self.inner.find_by_slug(slug).await
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<(Vec<Post>, u64)> {
        self.inner.list(filter).await
    }
}

/* -------------------------------- categories -------------------------------- */

#[derive(Default)]
struct CategoryStore {
    next_id: i64,
    rows: BTreeMap<i64, Category>,
}

impl CategoryStore {
    fn slug_in_use(&self, slug: &Slug, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|c| &c.slug == slug && Some(c.id.0) != except)
    }
}

/// Category table kept in memory. When linked to a post store, deletes are
/// restricted like the `posts.category_id` foreign key.
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    inner: Mutex<CategoryStore>,
    posts: Option<Arc<InMemoryPostRepo>>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restricted_by(posts: Arc<InMemoryPostRepo>) -> Self {
        Self {
            inner: Mutex::default(),
            posts: Some(posts),
        }
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut store = self.inner.lock().unwrap();
        if store.slug_in_use(&category.slug, None) {
            return Err(slug_taken());
        }
        store.next_id += 1;
        let created = Category {
            id: CategoryId(store.next_id),
            name: category.name,
            slug: category.slug,
            image: category.image,
            description: category.description,
            priority: category.priority,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        let id = store.next_id;
        store.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut store = self.inner.lock().unwrap();
        if store.slug_in_use(&update.slug, Some(update.id.0)) {
            return Err(slug_taken());
        }
        let row = store
            .rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        row.name = update.name;
        row.slug = update.slug;
        row.image = update.image;
        row.description = update.description;
        row.priority = update.priority;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        if self.posts.as_ref().is_some_and(|posts| posts.references_category(id)) {
            return Err(DomainError::Conflict("category still has posts".into()));
        }
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().find(|c| &c.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().find(|c| c.name.as_str() == name).cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let store = self.inner.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| store.rows.get(&id.0).cloned())
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let store = self.inner.lock().unwrap();
        let mut rows: Vec<Category> = store.rows.values().cloned().collect();
        rows.sort_by(|a, b| {
            (a.priority.is_none(), a.priority, a.name.as_str(), a.id.0).cmp(&(
                b.priority.is_none(),
                b.priority,
                b.name.as_str(),
                b.id.0,
            ))
        });
        Ok(rows)
    }
}

/* -------------------------------- popups -------------------------------- */

#[derive(Default)]
struct PopupStore {
    next_id: i64,
    rows: BTreeMap<i64, Popup>,
}

#[derive(Default)]
pub struct InMemoryPopupRepo {
    inner: Mutex<PopupStore>,
}

impl InMemoryPopupRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PopupWriteRepository for InMemoryPopupRepo {
    async fn insert(&self, popup: NewPopup) -> DomainResult<Popup> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let created = Popup {
            id: PopupId(store.next_id),
            media: popup.media,
            created_at: popup.created_at,
            updated_at: popup.updated_at,
        };
        let id = store.next_id;
        store.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PopupUpdate) -> DomainResult<Popup> {
        let mut store = self.inner.lock().unwrap();
        let row = store
            .rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("popup not found".into()))?;
        row.media = update.media;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: PopupId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("popup not found".into()))
    }
}

#[async_trait]
impl PopupReadRepository for InMemoryPopupRepo {
    async fn find_by_id(&self, id: PopupId) -> DomainResult<Option<Popup>> {
        Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn first(&self) -> DomainResult<Option<Popup>> {
        Ok(self.inner.lock().unwrap().rows.values().next().cloned())
    }
}
