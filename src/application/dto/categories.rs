use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            image: category.image,
            description: category.description,
            priority: category.priority,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Category fields embedded in post responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategorySummaryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
        }
    }
}
