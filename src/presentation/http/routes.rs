// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, popups, posts},
    middleware::rate_limit::admin_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Knobs for the outer layers. An empty origin list allows any origin.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit_enabled: bool,
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit_enabled: config.rate_limit_enabled(),
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let mut admin = Router::new()
        .route("/posts", post(posts::create_post))
        .route(
            "/posts/{id}",
            put(posts::update_post).delete(posts::delete_post),
        )
        .route("/categories", post(categories::create_category))
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/popups", post(popups::create_popup))
        .route(
            "/popups/{id}",
            put(popups::update_popup).delete(popups::delete_popup),
        );
    if options.rate_limit_enabled {
        admin = admin.layer(admin_rate_limit_layer());
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/posts", get(posts::list_posts))
        .route("/api/v1/posts/by-slug/{slug}", get(posts::get_post_by_slug))
        .route("/api/v1/categories", get(categories::list_categories))
        .route(
            "/api/v1/categories/by-slug/{slug}",
            get(categories::get_category_by_slug),
        )
        .route("/api/v1/popup", get(popups::get_popup))
        .nest("/api/v1/admin", admin)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
