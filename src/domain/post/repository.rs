use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostFilter, PostId};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// One page of posts matching `filter`, plus the total number of matches.
    async fn list(&self, filter: &PostFilter) -> DomainResult<(Vec<Post>, u64)>;
}
