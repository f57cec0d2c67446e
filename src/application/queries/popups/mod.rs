mod current;
mod service;

pub use service::PopupQueryService;
