// src/application/commands/popups/delete.rs
use super::PopupCommandService;
use crate::{
    application::{
        dto::DeletedPopupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::popup::PopupId,
};

pub struct DeletePopupCommand {
    pub id: i64,
}

impl PopupCommandService {
    pub async fn delete_popup(&self, command: DeletePopupCommand) -> ApplicationResult<DeletedPopupDto> {
        let id = PopupId::new(command.id)?;
        let popup = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no popup found with id: {}", id.0)))?;

        self.write_repo.delete(id).await?;

        let media: Vec<String> = popup
            .media
            .kinds()
            .into_iter()
            .map(|kind| kind.as_str().to_string())
            .collect();
        tracing::info!(popup_id = id.0, media = ?media, "popup deleted");
        Ok(DeletedPopupDto {
            status: "deleted".into(),
            media,
        })
    }
}
