pub mod category;
pub mod errors;
pub mod popup;
pub mod post;
pub mod slug;
