// src/domain/slug/resolver.rs
use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::normalizer::{SlugNormalizer, truncate_slug};
use crate::domain::slug::value_objects::{MAX_SLUG_LEN, Slug};

/// Default bound on availability checks before giving up.
pub const MAX_SLUG_ATTEMPTS: usize = 10_000;

/// Answers whether a slug is free in one collection.
///
/// `exclude` names a record whose own slug does not count as a collision,
/// which is how an update keeps its current slug.
#[async_trait]
pub trait SlugAvailability: Send + Sync {
    async fn is_available(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool>;
}

/// Same contract as [`SlugAvailability`] for free-form display names.
#[async_trait]
pub trait NameAvailability: Send + Sync {
    async fn is_name_available(&self, candidate: &str, exclude: Option<i64>)
    -> DomainResult<bool>;
}

/// Finds the first free slug among `base`, `base-1`, `base-2`, ...
#[derive(Clone)]
pub struct UniqueSlugResolver {
    normalizer: SlugNormalizer,
    max_attempts: usize,
}

impl UniqueSlugResolver {
    pub fn new(normalizer: SlugNormalizer) -> Self {
        Self {
            normalizer,
            max_attempts: MAX_SLUG_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Normalizes `base_input` and returns the first candidate the
    /// availability port accepts. Errors from the port propagate unchanged.
    pub async fn resolve(
        &self,
        base_input: &str,
        availability: &dyn SlugAvailability,
        exclude: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.normalizer.normalize(base_input);
        let mut candidate = base.clone();

        for counter in 1..=self.max_attempts {
            if availability.is_available(&candidate, exclude).await? {
                return Ok(candidate);
            }
            tracing::debug!(slug = %candidate, "slug taken, trying next suffix");
            candidate = suffixed(&base, counter);
        }

        tracing::warn!(
            base = %base,
            attempts = self.max_attempts,
            "gave up looking for a free slug"
        );
        Err(DomainError::SlugExhausted {
            base: base.into_inner(),
            attempts: self.max_attempts,
        })
    }
}

fn suffixed(base: &Slug, counter: usize) -> Slug {
    let suffix = format!("-{counter}");
    let mut stem = base.as_str().to_string();
    truncate_slug(&mut stem, MAX_SLUG_LEN - suffix.len());
    stem.push_str(&suffix);
    Slug::from_normalized(stem)
}

/// Finds the first free display name among `name`, `name 1`, `name 2`, ...
///
/// Names are used verbatim; no character normalization is applied.
#[derive(Clone, Debug)]
pub struct UniqueNameResolver {
    max_attempts: usize,
}

impl Default for UniqueNameResolver {
    fn default() -> Self {
        Self {
            max_attempts: MAX_SLUG_ATTEMPTS,
        }
    }
}

impl UniqueNameResolver {
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn resolve(
        &self,
        base_name: &str,
        availability: &dyn NameAvailability,
        exclude: Option<i64>,
    ) -> DomainResult<String> {
        let mut candidate = base_name.to_string();

        for counter in 1..=self.max_attempts {
            if availability.is_name_available(&candidate, exclude).await? {
                return Ok(candidate);
            }
            tracing::debug!(name = %candidate, "name taken, trying next suffix");
            candidate = format!("{base_name} {counter}");
        }

        tracing::warn!(base = base_name, attempts = self.max_attempts, "gave up looking for a free name");
        Err(DomainError::NameExhausted {
            base: base_name.to_string(),
            attempts: self.max_attempts,
        })
    }
}
