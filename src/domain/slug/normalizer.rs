// src/domain/slug/normalizer.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::Transliterator};
use crate::domain::slug::value_objects::{MAX_SLUG_LEN, Slug};

/// Prefix of the placeholder used when nothing slug-worthy survives.
pub const FALLBACK_PREFIX: &str = "item";

/// Lowercases `input`, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, and joins the surviving runs with single hyphens.
///
/// Returns an empty string when nothing survives. The result is capped at
/// [`MAX_SLUG_LEN`] bytes.
pub fn format_slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
    }

    truncate_slug(&mut out, MAX_SLUG_LEN);
    out
}

/// Cuts an ASCII slug down to `max` bytes without leaving a dangling hyphen.
pub(crate) fn truncate_slug(slug: &mut String, max: usize) {
    if slug.len() > max {
        slug.truncate(max);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
}

/// Turns arbitrary titles and names into slugs.
///
/// Transliteration and the fallback timestamp are injected so the algorithm
/// itself stays deterministic under test.
#[derive(Clone)]
pub struct SlugNormalizer {
    transliterator: Arc<dyn Transliterator>,
    clock: Arc<dyn Clock>,
}

impl SlugNormalizer {
    pub fn new(transliterator: Arc<dyn Transliterator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transliterator,
            clock,
        }
    }

    pub fn normalize(&self, input: &str) -> Slug {
        let latin = self.transliterator.transliterate(input);
        let formatted = format_slug(&latin);
        if formatted.is_empty() {
            let fallback = format!("{FALLBACK_PREFIX}-{}", self.clock.now_millis().unsigned_abs());
            tracing::debug!(input, slug = %fallback, "input produced an empty slug, using placeholder");
            return Slug::from_normalized(fallback);
        }
        Slug::from_normalized(formatted)
    }
}
