// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート

pub mod repos;
pub mod time;

pub use repos::{InMemoryCategoryRepo, InMemoryPopupRepo, InMemoryPostRepo, RacingPostRepo};
pub use time::{FixedClock, fixed_now, fixed_now_millis};
