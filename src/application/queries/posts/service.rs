use std::sync::Arc;

use crate::domain::{category::CategoryReadRepository, post::PostReadRepository};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
        }
    }
}
