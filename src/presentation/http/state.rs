// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::extractors::AdminCredentials;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub admin: Arc<AdminCredentials>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, admin_token: &str) -> Self {
        Self {
            services,
            admin: Arc::new(AdminCredentials::new(admin_token)),
        }
    }
}
