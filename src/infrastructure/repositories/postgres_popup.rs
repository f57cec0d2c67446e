// src/infrastructure/repositories/postgres_popup.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::popup::{
    MediaUrl, NewPopup, Popup, PopupId, PopupMedia, PopupReadRepository, PopupUpdate,
    PopupWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const POPUP_COLUMNS: &str = "id, image, video, gif, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPopupWriteRepository {
    pool: PgPool,
}

impl PostgresPopupWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPopupReadRepository {
    pool: PgPool,
}

impl PostgresPopupReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PopupRow {
    id: i64,
    image: Option<String>,
    video: Option<String>,
    gif: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PopupRow> for Popup {
    type Error = DomainError;

    fn try_from(row: PopupRow) -> Result<Self, Self::Error> {
        Ok(Popup {
            id: PopupId::new(row.id)?,
            media: PopupMedia::new(row.image.as_deref(), row.video.as_deref(), row.gif.as_deref())?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn slot(url: Option<&MediaUrl>) -> Option<&str> {
    url.map(MediaUrl::as_str)
}

#[async_trait]
impl PopupWriteRepository for PostgresPopupWriteRepository {
    async fn insert(&self, popup: NewPopup) -> DomainResult<Popup> {
        let NewPopup {
            media,
            created_at,
            updated_at,
        } = popup;

        let row = sqlx::query_as::<_, PopupRow>(&format!(
            "INSERT INTO popups (image, video, gif, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {POPUP_COLUMNS}"
        ))
        .bind(slot(media.image()))
        .bind(slot(media.video()))
        .bind(slot(media.gif()))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Popup::try_from(row)
    }

    async fn update(&self, update: PopupUpdate) -> DomainResult<Popup> {
        let PopupUpdate {
            id,
            media,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PopupRow>(&format!(
            "UPDATE popups SET image = $1, video = $2, gif = $3, updated_at = $4
             WHERE id = $5
             RETURNING {POPUP_COLUMNS}"
        ))
        .bind(slot(media.image()))
        .bind(slot(media.video()))
        .bind(slot(media.gif()))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("popup not found".into()))?;

        Popup::try_from(row)
    }

    async fn delete(&self, id: PopupId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM popups WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("popup not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PopupReadRepository for PostgresPopupReadRepository {
    async fn find_by_id(&self, id: PopupId) -> DomainResult<Option<Popup>> {
        let row = sqlx::query_as::<_, PopupRow>(&format!(
            "SELECT {POPUP_COLUMNS} FROM popups WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Popup::try_from).transpose()
    }

    async fn first(&self) -> DomainResult<Option<Popup>> {
        let row = sqlx::query_as::<_, PopupRow>(&format!(
            "SELECT {POPUP_COLUMNS} FROM popups ORDER BY id ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Popup::try_from).transpose()
    }
}
