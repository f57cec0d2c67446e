// src/domain/slug/mod.rs
pub mod normalizer;
pub mod resolver;
pub mod value_objects;

pub use normalizer::{SlugNormalizer, format_slug};
pub use resolver::{
    MAX_SLUG_ATTEMPTS, NameAvailability, SlugAvailability, UniqueNameResolver, UniqueSlugResolver,
};
pub use value_objects::{MAX_SLUG_LEN, Slug};
