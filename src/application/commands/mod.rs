pub mod categories;
pub mod popups;
pub mod posts;
mod retry;

pub use retry::WRITE_CONFLICT_RETRIES;

/// Treats a missing or whitespace-only slug override as absent.
pub(crate) fn requested_slug(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
