// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::{requested_slug, retry::retry_on_slug_conflict},
        dto::CategoryDto,
        error::ApplicationResult,
    },
    domain::category::{CategoryName, NewCategory},
};

#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    /// Append ` 1`, ` 2`, ... to the name until no other category uses it.
    pub dedupe_name: bool,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let mut name = CategoryName::new(command.name.clone())?;
        if command.dedupe_name {
            name = self.slug_service.generate_unique_name(&name, None).await?;
        }
        let base = requested_slug(command.slug.as_deref()).unwrap_or(name.as_str());
        let now = self.clock.now();

        let (name, command) = (&name, &command);
        let created = retry_on_slug_conflict("category", move || async move {
            let slug = self.slug_service.generate_unique_slug(base, None).await?;
            self.write_repo
                .insert(NewCategory {
                    name: name.clone(),
                    slug,
                    image: command.image.clone(),
                    description: command.description.clone(),
                    priority: command.priority,
                    created_at: now,
                    updated_at: now,
                })
                .await
        })
        .await?;

        tracing::info!(category_id = created.id.0, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
