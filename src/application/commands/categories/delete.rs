// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Fails with a conflict while posts still reference the category.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.write_repo.delete(category.id).await?;
        tracing::info!(category_id = id.0, slug = %category.slug, "category deleted");
        Ok(())
    }
}
