use crate::domain::popup::{MediaUrl, Popup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PopupDto {
    pub id: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub gif: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Popup> for PopupDto {
    fn from(popup: Popup) -> Self {
        let url = |slot: Option<&MediaUrl>| slot.map(|u| u.as_str().to_string());
        Self {
            id: popup.id.into(),
            image: url(popup.media.image()),
            video: url(popup.media.video()),
            gif: url(popup.media.gif()),
            created_at: popup.created_at,
            updated_at: popup.updated_at,
        }
    }
}

/// Outcome of a popup delete, naming the media it carried.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedPopupDto {
    pub status: String,
    pub media: Vec<String>,
}
