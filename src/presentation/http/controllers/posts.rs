// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, PostPageDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminToken;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size, 1 to 100.
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub featured: Option<bool>,
    /// Category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// At least two characters; matched against title, description and excerpt
    /// within the other filters.
    #[serde(default)]
    pub search: Option<String>,
    /// `oldest` or `latest` (default).
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub map: Option<String>,
}

/// Full replacement of a post's editable fields.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub map: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Page of posts", body = PostPageDto),
        (status = 400, description = "Invalid paging or search parameters", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category slug", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostPageDto>> {
    let query = ListPostsQuery {
        page: params.page,
        limit: params.limit,
        featured: params.featured,
        category: params.category,
        search: params.search,
        sort: params.sort,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post", body = PostDto),
        (status = 404, description = "No post with this slug", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Missing title, description or category", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        category_id: payload.category_id,
        image: payload.image,
        excerpt: payload.excerpt,
        gallery: payload.gallery,
        is_featured: payload.is_featured,
        map: payload.map,
    };

    let created = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 404, description = "Post not found", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        category_id: payload.category_id,
        image: payload.image,
        excerpt: payload.excerpt,
        gallery: payload.gallery,
        is_featured: payload.is_featured,
        map: payload.map,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 404, description = "Post not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
