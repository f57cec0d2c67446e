use crate::domain::errors::DomainResult;
use crate::domain::popup::entity::{NewPopup, Popup, PopupUpdate};
use crate::domain::popup::value_objects::PopupId;
use async_trait::async_trait;

#[async_trait]
pub trait PopupWriteRepository: Send + Sync {
    async fn insert(&self, popup: NewPopup) -> DomainResult<Popup>;
    async fn update(&self, update: PopupUpdate) -> DomainResult<Popup>;
    async fn delete(&self, id: PopupId) -> DomainResult<()>;
}

#[async_trait]
pub trait PopupReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PopupId) -> DomainResult<Option<Popup>>;
    /// The popup the public site shows: the oldest one still stored.
    async fn first(&self) -> DomainResult<Option<Popup>>;
}
