// src/domain/post/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::{Slug, SlugAvailability, UniqueSlugResolver};

/// Availability of a slug in the posts table.
pub struct PostSlugAvailability {
    read_repo: Arc<dyn PostReadRepository>,
}

impl PostSlugAvailability {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl SlugAvailability for PostSlugAvailability {
    async fn is_available(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        Ok(match self.read_repo.find_by_slug(candidate).await? {
            Some(existing) => exclude == Some(i64::from(existing.id)),
            None => true,
        })
    }
}

/// Domain service responsible for producing unique slugs for posts.
pub struct PostSlugService {
    availability: PostSlugAvailability,
    resolver: UniqueSlugResolver,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, resolver: UniqueSlugResolver) -> Self {
        Self {
            availability: PostSlugAvailability::new(read_repo),
            resolver,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        base: &str,
        ignore_id: Option<PostId>,
    ) -> DomainResult<Slug> {
        self.resolver
            .resolve(base, &self.availability, ignore_id.map(i64::from))
            .await
    }
}
