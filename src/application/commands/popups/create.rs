// src/application/commands/popups/create.rs
use super::PopupCommandService;
use crate::{
    application::{dto::PopupDto, error::ApplicationResult},
    domain::popup::{NewPopup, PopupMedia},
};

#[derive(Debug, Clone, Default)]
pub struct CreatePopupCommand {
    pub image: Option<String>,
    pub video: Option<String>,
    pub gif: Option<String>,
}

impl PopupCommandService {
    pub async fn create_popup(&self, command: CreatePopupCommand) -> ApplicationResult<PopupDto> {
        let media = PopupMedia::new(
            command.image.as_deref(),
            command.video.as_deref(),
            command.gif.as_deref(),
        )?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewPopup {
                media,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(popup_id = created.id.0, "popup created");
        Ok(created.into())
    }
}
