pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPopup, Popup, PopupUpdate};
pub use repository::{PopupReadRepository, PopupWriteRepository};
pub use value_objects::{MediaKind, MediaUrl, PopupId, PopupMedia};
