use super::PostQueryService;
use crate::{
    application::{
        dto::{CategorySummaryDto, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let not_found = || ApplicationError::not_found(format!("no post found with slug: {}", query.slug));
        // A string that is not slug-shaped cannot match any stored post.
        let slug = Slug::new(query.slug.as_str()).map_err(|_| not_found())?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        let category = self
            .category_repo
            .find_by_id(post.category_id)
            .await?
            .map(|c| CategorySummaryDto::from(&c));
        Ok(PostDto::from(post).with_category(category))
    }
}
