// src/domain/post/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{PostDescription, PostId, PostTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub description: PostDescription,
    pub gallery: Vec<String>,
    pub is_featured: bool,
    pub map: Option<String>,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Whether an update needs a freshly resolved slug, and from which input.
    ///
    /// An explicit slug that differs from the stored one wins; otherwise a
    /// changed title triggers regeneration. `None` keeps the current slug.
    pub fn slug_source<'a>(
        &self,
        requested_slug: Option<&'a str>,
        new_title: &'a PostTitle,
    ) -> Option<&'a str> {
        match requested_slug {
            Some(requested) if requested != self.slug.as_str() => Some(requested),
            _ if new_title != &self.title => Some(new_title.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub description: PostDescription,
    pub gallery: Vec<String>,
    pub is_featured: bool,
    pub map: Option<String>,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a post's editable fields.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub description: PostDescription,
    pub gallery: Vec<String>,
    pub is_featured: bool,
    pub map: Option<String>,
    pub category_id: CategoryId,
    pub updated_at: DateTime<Utc>,
}
