// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
    queries::categories::GetCategoryBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminToken;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    /// Suffix the name with a counter when another category already uses it.
    #[serde(default)]
    pub dedupe_name: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "All categories by priority", body = [CategoryDto])),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 404, description = "No category with this slug", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Missing name", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
        image: payload.image,
        description: payload.description,
        priority: payload.priority,
        dedupe_name: payload.dedupe_name,
    };

    let created = state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 404, description = "Category not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        image: payload.image,
        description: payload.description,
        priority: payload.priority,
    };

    state
        .services
        .category_commands
        .update_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Posts still reference the category", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
