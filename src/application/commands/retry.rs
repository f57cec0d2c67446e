// src/application/commands/retry.rs
use std::future::Future;

use crate::domain::errors::{DomainError, DomainResult};

/// Write attempts made before a slug conflict is reported to the caller.
pub const WRITE_CONFLICT_RETRIES: usize = 3;

/// Re-runs `attempt` when the store rejects its write with a conflict.
///
/// `attempt` must resolve the slug itself, so every retry sees the rows
/// committed by whichever request won the previous race.
pub(crate) async fn retry_on_slug_conflict<T, F, Fut>(
    entity: &'static str,
    mut attempt: F,
) -> DomainResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let mut tries = 1;
    loop {
        match attempt().await {
            Err(DomainError::Conflict(reason)) if tries < WRITE_CONFLICT_RETRIES => {
                tracing::warn!(entity, attempt = tries, %reason, "slug conflict on write, resolving again");
                tries += 1;
            }
            other => return other,
        }
    }
}
