// src/presentation/http/controllers/popups.rs
use crate::application::{
    commands::popups::{CreatePopupCommand, DeletePopupCommand, UpdatePopupCommand},
    dto::{DeletedPopupDto, PopupDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminToken;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Media URLs of a popup. At least one must be set; blank values count as unset.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PopupRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub gif: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/popup",
    responses(
        (status = 200, description = "Popup currently shown", body = PopupDto),
        (status = 404, description = "No popup configured", body = ErrorResponse)
    ),
    tag = "Popups"
)]
pub async fn get_popup(Extension(state): Extension<HttpState>) -> HttpResult<Json<PopupDto>> {
    state
        .services
        .popup_queries
        .current_popup()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/popups",
    request_body = PopupRequest,
    responses(
        (status = 201, description = "Popup created", body = PopupDto),
        (status = 400, description = "No media or an invalid URL", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_popup(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Json(payload): Json<PopupRequest>,
) -> HttpResult<(StatusCode, Json<PopupDto>)> {
    let command = CreatePopupCommand {
        image: payload.image,
        video: payload.video,
        gif: payload.gif,
    };

    let created = state
        .services
        .popup_commands
        .create_popup(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/popups/{id}",
    params(("id" = i64, Path, description = "Popup id")),
    request_body = PopupRequest,
    responses(
        (status = 200, description = "Popup updated", body = PopupDto),
        (status = 400, description = "No media or an invalid URL", body = ErrorResponse),
        (status = 404, description = "Popup not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_popup(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Path(id): Path<i64>,
    Json(payload): Json<PopupRequest>,
) -> HttpResult<Json<PopupDto>> {
    let command = UpdatePopupCommand {
        id,
        image: payload.image,
        video: payload.video,
        gif: payload.gif,
    };

    state
        .services
        .popup_commands
        .update_popup(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/popups/{id}",
    params(("id" = i64, Path, description = "Popup id")),
    responses(
        (status = 200, description = "Popup deleted", body = DeletedPopupDto),
        (status = 404, description = "Popup not found", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_popup(
    Extension(state): Extension<HttpState>,
    _admin: AdminToken,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedPopupDto>> {
    state
        .services
        .popup_commands
        .delete_popup(DeletePopupCommand { id })
        .await
        .into_http()
        .map(Json)
}
