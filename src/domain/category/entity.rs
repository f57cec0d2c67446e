// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub image: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Input for a regenerated slug, or `None` to keep the current one.
    pub fn slug_source<'a>(
        &self,
        requested_slug: Option<&'a str>,
        new_name: &'a CategoryName,
    ) -> Option<&'a str> {
        match requested_slug {
            Some(requested) if requested != self.slug.as_str() => Some(requested),
            _ if new_name != &self.name => Some(new_name.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub image: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a category's editable fields.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub image: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub updated_at: DateTime<Utc>,
}
