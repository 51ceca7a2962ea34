// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::ArticleId, errors::DomainError},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Join rows go with the article (FK cascade); the tags themselves
    /// stay behind.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        match self.write_repo.delete(id).await {
            Ok(()) => {
                tracing::info!(article_id = command.id, "article deleted");
                Ok(())
            }
            Err(DomainError::NotFound(msg)) => Err(ApplicationError::not_found(msg)),
            Err(other) => Err(other.into()),
        }
    }
}
