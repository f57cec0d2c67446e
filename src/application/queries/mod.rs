pub mod categories;
pub mod popups;
pub mod posts;
