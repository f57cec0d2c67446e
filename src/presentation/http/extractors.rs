// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use sha2::{Digest, Sha256};

use super::error::HttpError;

/// Digest of the shared admin token. The plain token is not kept around.
#[derive(Clone)]
pub struct AdminCredentials {
    digest: [u8; 32],
}

impl AdminCredentials {
    pub fn new(token: &str) -> Self {
        Self {
            digest: Sha256::digest(token.as_bytes()).into(),
        }
    }

    /// Compares digests so the check does not short-circuit on the token itself.
    pub fn verify(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        presented
            .iter()
            .zip(self.digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Proof that the request carried the admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        if !app_state.admin.verify(header.token()) {
            tracing::warn!(path = %parts.uri.path(), "rejected admin request with invalid token");
            return Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            )));
        }

        Ok(Self)
    }
}
