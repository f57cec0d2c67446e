// src/application/commands/popups/update.rs
use super::PopupCommandService;
use crate::{
    application::{
        dto::PopupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::popup::{PopupId, PopupMedia, PopupUpdate},
};

/// Replaces every media slot; omitted slots are cleared.
#[derive(Debug, Clone, Default)]
pub struct UpdatePopupCommand {
    pub id: i64,
    pub image: Option<String>,
    pub video: Option<String>,
    pub gif: Option<String>,
}

impl PopupCommandService {
    pub async fn update_popup(&self, command: UpdatePopupCommand) -> ApplicationResult<PopupDto> {
        let id = PopupId::new(command.id)?;
        let media = PopupMedia::new(
            command.image.as_deref(),
            command.video.as_deref(),
            command.gif.as_deref(),
        )?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no popup found with id: {}", id.0)))?;

        let updated = self
            .write_repo
            .update(PopupUpdate {
                id,
                media,
                updated_at: self.clock.now(),
            })
            .await?;

        tracing::info!(popup_id = updated.id.0, "popup updated");
        Ok(updated.into())
    }
}
