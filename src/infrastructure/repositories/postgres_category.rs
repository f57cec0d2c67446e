// src/infrastructure/repositories/postgres_category.rs
use super::error::{CNT_POST_CATEGORY, violates};
use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryReadRepository, CategoryUpdate,
    CategoryWriteRepository, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const CATEGORY_COLUMNS: &str =
    "id, name, slug, image, description, priority, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryWriteRepository {
    pool: PgPool,
}

impl PostgresCategoryWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCategoryReadRepository {
    pool: PgPool,
}

impl PostgresCategoryReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    image: Option<String>,
    description: Option<String>,
    priority: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            image: row.image,
            description: row.description,
            priority: row.priority,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for PostgresCategoryWriteRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            image,
            description,
            priority,
            created_at,
            updated_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (name, slug, image, description, priority, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(image)
        .bind(description)
        .bind(priority)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            image,
            description,
            priority,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories SET name = $1, slug = $2, image = $3, description = $4,
                priority = $5, updated_at = $6
             WHERE id = $7
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(image)
        .bind(description)
        .bind(priority)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if violates(&err, CNT_POST_CATEGORY) {
                    DomainError::Conflict("category still has posts".into())
                } else {
                    map_sqlx(err)
                }
            })?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for PostgresCategoryReadRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE name = $1 ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY priority ASC NULLS LAST, name ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
