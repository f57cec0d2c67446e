use crate::application::dto::CategorySummaryDto;
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub description: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub is_featured: bool,
    #[serde(default)]
    pub map: Option<String>,
    pub category_id: i64,
    /// Filled in by the public read endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn with_category(mut self, category: Option<CategorySummaryDto>) -> Self {
        self.category = category;
        self
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            image: post.image,
            excerpt: post.excerpt,
            description: post.description.into_inner(),
            gallery: post.gallery,
            is_featured: post.is_featured,
            map: post.map,
            category_id: post.category_id.into(),
            category: None,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Offset page of posts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPageDto {
    pub items: Vec<PostDto>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PostPageDto {
    pub fn new(items: Vec<PostDto>, page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            items,
            page,
            limit,
            total,
            total_pages,
            has_next_page: u64::from(page) < total_pages,
            has_prev_page: page > 1,
        }
    }
}
