// src/application/commands/articles/toggle_publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct TogglePublishCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Flip between draft and published-now. A scheduled article counts
    /// as not-yet-published, so toggling it publishes immediately.
    pub async fn toggle_publish(
        &self,
        command: TogglePublishCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        if article.is_published(now) {
            article.unpublish(now);
        } else {
            article.publish(now);
        }

        let update = ArticleUpdate::new(id, article.updated_at)
            .with_published_at(article.published_at);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = command.id,
            published = updated.is_published(now),
            "publish state toggled"
        );

        let tags = self.tag_repo.tags_for_article(updated.id).await?;
        Ok(ArticleDto::from_parts(updated, tags, now))
    }
}
