// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod input;
mod service;
mod toggle_publish;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use input::{ArticleInput, parse_published_at};
pub use service::ArticleCommandService;
pub use toggle_publish::TogglePublishCommand;
pub use update::UpdateArticleCommand;
