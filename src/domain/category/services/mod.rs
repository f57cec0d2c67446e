// src/domain/category/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryReadRepository;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{
    NameAvailability, Slug, SlugAvailability, UniqueNameResolver, UniqueSlugResolver,
};

/// Availability of a slug in the categories table.
pub struct CategorySlugAvailability {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategorySlugAvailability {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl SlugAvailability for CategorySlugAvailability {
    async fn is_available(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        Ok(match self.read_repo.find_by_slug(candidate).await? {
            Some(existing) => exclude == Some(i64::from(existing.id)),
            None => true,
        })
    }
}

/// Availability of a display name among categories.
pub struct CategoryNameAvailability {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategoryNameAvailability {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl NameAvailability for CategoryNameAvailability {
    async fn is_name_available(
        &self,
        candidate: &str,
        exclude: Option<i64>,
    ) -> DomainResult<bool> {
        Ok(match self.read_repo.find_by_name(candidate).await? {
            Some(existing) => exclude == Some(i64::from(existing.id)),
            None => true,
        })
    }
}

/// Domain service responsible for producing unique slugs and names for categories.
pub struct CategorySlugService {
    slugs: CategorySlugAvailability,
    names: CategoryNameAvailability,
    resolver: UniqueSlugResolver,
    name_resolver: UniqueNameResolver,
}

impl CategorySlugService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>, resolver: UniqueSlugResolver) -> Self {
        Self {
            slugs: CategorySlugAvailability::new(Arc::clone(&read_repo)),
            names: CategoryNameAvailability::new(read_repo),
            resolver,
            name_resolver: UniqueNameResolver::default(),
        }
    }

    pub async fn generate_unique_slug(
        &self,
        base: &str,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<Slug> {
        self.resolver
            .resolve(base, &self.slugs, ignore_id.map(i64::from))
            .await
    }

    pub async fn generate_unique_name(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<CategoryName> {
        let resolved = self
            .name_resolver
            .resolve(name.as_str(), &self.names, ignore_id.map(i64::from))
            .await?;
        CategoryName::new(resolved)
    }
}
