// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostDescription, PostFilter, PostId, PostReadRepository, PostSort, PostTitle,
    PostUpdate, PostWriteRepository,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, image, excerpt, description, gallery, is_featured, map, category_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    image: Option<String>,
    excerpt: Option<String>,
    description: String,
    gallery: Vec<String>,
    is_featured: bool,
    map: Option<String>,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            image: row.image,
            excerpt: row.excerpt,
            description: PostDescription::new(row.description)?,
            gallery: row.gallery,
            is_featured: row.is_featured,
            map: row.map,
            category_id: CategoryId::new(row.category_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            image,
            excerpt,
            description,
            gallery,
            is_featured,
            map,
            category_id,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, image, excerpt, description, gallery, is_featured, map, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(image)
        .bind(excerpt)
        .bind(description.as_str())
        .bind(gallery)
        .bind(is_featured)
        .bind(map)
        .bind(i64::from(category_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            image,
            excerpt,
            description,
            gallery,
            is_featured,
            map,
            category_id,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = $1, slug = $2, image = $3, excerpt = $4, description = $5,
                gallery = $6, is_featured = $7, map = $8, category_id = $9, updated_at = $10
             WHERE id = $11
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(image)
        .bind(excerpt)
        .bind(description.as_str())
        .bind(gallery)
        .bind(is_featured)
        .bind(map)
        .bind(i64::from(category_id))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

/// Escapes `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl PostgresPostReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &PostFilter) {
        let mut has_where = false;
        let mut clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(featured) = filter.featured {
            clause(builder);
            builder.push("is_featured = ").push_bind(featured);
        }

        if let Some(category_id) = filter.category_id {
            clause(builder);
            builder.push("category_id = ").push_bind(i64::from(category_id));
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", escape_like(search));
            clause(builder);
            builder
                .push("(title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR excerpt ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<(Vec<Post>, u64)> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::apply_filter(&mut select, filter);
        select.push(match filter.sort {
            PostSort::Newest => " ORDER BY created_at DESC, id DESC",
            PostSort::Oldest => " ORDER BY created_at ASC, id ASC",
        });
        select.push(" LIMIT ").push_bind(filter.limit);
        select.push(" OFFSET ").push_bind(filter.offset);

        let rows = select
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn filter_builds_expected_where_clause() {
        let filter = PostFilter {
            featured: Some(true),
            category_id: Some(CategoryId(3)),
            ..PostFilter::default()
        };
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        PostgresPostReadRepository::apply_filter(&mut builder, &filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM posts WHERE is_featured = $1 AND category_id = $2"
        );
    }

    #[test]
    fn search_clause_covers_three_columns() {
        let filter = PostFilter {
            search: Some("rust".into()),
            ..PostFilter::default()
        };
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        PostgresPostReadRepository::apply_filter(&mut builder, &filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM posts WHERE (title ILIKE $1 OR description ILIKE $2 OR excerpt ILIKE $3)"
        );
    }

    #[test]
    fn search_is_anded_with_category() {
        let filter = PostFilter {
            category_id: Some(CategoryId(5)),
            search: Some("rust".into()),
            ..PostFilter::default()
        };
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        PostgresPostReadRepository::apply_filter(&mut builder, &filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM posts WHERE category_id = $1 AND (title ILIKE $2 OR description ILIKE $3 OR excerpt ILIKE $4)"
        );
    }
}
