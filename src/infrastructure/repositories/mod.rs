// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_popup;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_category::{PostgresCategoryReadRepository, PostgresCategoryWriteRepository};
pub use postgres_popup::{PostgresPopupReadRepository, PostgresPopupWriteRepository};
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
