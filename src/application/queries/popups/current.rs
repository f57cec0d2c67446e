use super::PopupQueryService;
use crate::application::{
    dto::PopupDto,
    error::{ApplicationError, ApplicationResult},
};

impl PopupQueryService {
    pub async fn current_popup(&self) -> ApplicationResult<PopupDto> {
        self.read_repo
            .first()
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("no popup found"))
    }
}
