// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::{requested_slug, retry::retry_on_slug_conflict},
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

/// Replaces every editable field of a category.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let name = CategoryName::new(command.name.clone())?;
        let slug_source = existing.slug_source(requested_slug(command.slug.as_deref()), &name);
        let now = self.clock.now();

        let (existing, name, command) = (&existing, &name, &command);
        let updated = retry_on_slug_conflict("category", move || async move {
            let slug = match slug_source {
                Some(source) => self.slug_service.generate_unique_slug(source, Some(id)).await?,
                None => existing.slug.clone(),
            };
            self.write_repo
                .update(CategoryUpdate {
                    id,
                    name: name.clone(),
                    slug,
                    image: command.image.clone(),
                    description: command.description.clone(),
                    priority: command.priority,
                    updated_at: now,
                })
                .await
        })
        .await?;

        tracing::info!(
            category_id = updated.id.0,
            slug = %updated.slug,
            slug_changed = slug_source.is_some(),
            "category updated"
        );
        Ok(updated.into())
    }
}
