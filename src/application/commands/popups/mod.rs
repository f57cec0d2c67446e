// src/application/commands/popups/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreatePopupCommand;
pub use delete::DeletePopupCommand;
pub use service::PopupCommandService;
pub use update::UpdatePopupCommand;
