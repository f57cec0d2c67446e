use std::sync::Arc;

use crate::domain::popup::PopupReadRepository;

pub struct PopupQueryService {
    pub(super) read_repo: Arc<dyn PopupReadRepository>,
}

impl PopupQueryService {
    pub fn new(read_repo: Arc<dyn PopupReadRepository>) -> Self {
        Self { read_repo }
    }
}
