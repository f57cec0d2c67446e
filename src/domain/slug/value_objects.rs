use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Upper bound on slug length in bytes. Slugs are ASCII, so bytes == chars.
pub const MAX_SLUG_LEN: usize = 200;

/// URL-safe lookup key for posts and categories.
///
/// A valid slug is non-empty, at most [`MAX_SLUG_LEN`] bytes, made of
/// `[a-z0-9-]`, and has no leading, trailing or doubled hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {MAX_SLUG_LEN} characters"
            )));
        }
        if !is_slug_shaped(&value) {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits and single inner hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Wraps output of the normalizer, which is slug-shaped by construction.
    pub(crate) fn from_normalized(value: String) -> Self {
        debug_assert!(is_slug_shaped(&value) && value.len() <= MAX_SLUG_LEN);
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_slug_shaped(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
