// src/domain/popup/entity.rs
use crate::domain::popup::value_objects::{PopupId, PopupMedia};
use chrono::{DateTime, Utc};

/// Promotional overlay shown by the public site.
#[derive(Debug, Clone)]
pub struct Popup {
    pub id: PopupId,
    pub media: PopupMedia,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPopup {
    pub media: PopupMedia,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replaces all three media slots of a popup.
#[derive(Debug, Clone)]
pub struct PopupUpdate {
    pub id: PopupId,
    pub media: PopupMedia,
    pub updated_at: DateTime<Utc>,
}
