// src/application/commands/popups/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::popup::{PopupReadRepository, PopupWriteRepository},
};

pub struct PopupCommandService {
    pub(super) write_repo: Arc<dyn PopupWriteRepository>,
    pub(super) read_repo: Arc<dyn PopupReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PopupCommandService {
    pub fn new(
        write_repo: Arc<dyn PopupWriteRepository>,
        read_repo: Arc<dyn PopupReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
