// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;

use super::mocks::{FixedClock, InMemoryCategoryRepo, InMemoryPopupRepo, InMemoryPostRepo};
use inkpress_core::application::ports::{time::Clock, util::Transliterator};
use inkpress_core::application::services::ApplicationServices;
use inkpress_core::domain::category::{CategoryReadRepository, CategoryWriteRepository};
use inkpress_core::domain::popup::{PopupReadRepository, PopupWriteRepository};
use inkpress_core::domain::post::{PostReadRepository, PostWriteRepository};
use inkpress_core::infrastructure::util::SlugCrateTransliterator;
use inkpress_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token-0123456789";

/// In-memory stores shared between a service graph and the test asserting on it.
pub struct TestStores {
    pub posts: Arc<InMemoryPostRepo>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub popups: Arc<InMemoryPopupRepo>,
}

impl TestStores {
    pub fn new() -> Self {
        let posts = Arc::new(InMemoryPostRepo::new());
        let categories = Arc::new(InMemoryCategoryRepo::restricted_by(Arc::clone(&posts)));
        Self {
            posts,
            categories,
            popups: Arc::new(InMemoryPopupRepo::new()),
        }
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        let post_write: Arc<dyn PostWriteRepository> = self.posts.clone();
        let post_read: Arc<dyn PostReadRepository> = self.posts.clone();
        build_services(
            post_write,
            post_read,
            self.categories.clone(),
            self.popups.clone(),
        )
    }
}

pub fn build_services(
    post_write: Arc<dyn PostWriteRepository>,
    post_read: Arc<dyn PostReadRepository>,
    categories: Arc<InMemoryCategoryRepo>,
    popups: Arc<InMemoryPopupRepo>,
) -> Arc<ApplicationServices> {
    let category_write: Arc<dyn CategoryWriteRepository> = categories.clone();
    let category_read: Arc<dyn CategoryReadRepository> = categories;
    let popup_write: Arc<dyn PopupWriteRepository> = popups.clone();
    let popup_read: Arc<dyn PopupReadRepository> = popups;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let transliterator: Arc<dyn Transliterator> = Arc::new(SlugCrateTransliterator);

    Arc::new(ApplicationServices::new(
        post_write,
        post_read,
        category_write,
        category_read,
        popup_write,
        popup_read,
        clock,
        transliterator,
    ))
}

pub fn make_test_router_with(stores: &TestStores) -> axum::Router {
    let state = HttpState::new(stores.services(), TEST_ADMIN_TOKEN);
    build_router(
        state,
        RouterOptions {
            allowed_origins: Vec::new(),
            rate_limit_enabled: false,
        },
    )
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(&TestStores::new())
}

/// Builds a JSON request, attaching `token` as a bearer credential when given.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    payload: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match payload {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request")
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
