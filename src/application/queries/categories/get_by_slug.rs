use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let not_found =
            || ApplicationError::not_found(format!("no category found with slug: {}", query.slug));
        let slug = Slug::new(query.slug.as_str()).map_err(|_| not_found())?;
        let category = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        Ok(category.into())
    }
}
