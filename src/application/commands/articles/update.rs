// src/application/commands/articles/update.rs
use super::{ArticleCommandService, input::ArticleInput};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleId, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub input: ArticleInput,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let validated = self
            .validate_input(&command.input, Some(id), Some(existing.slug))
            .await?;
        let now = self.clock.now();

        // The form submits every field, so the update replaces them
        // wholesale; an emptied published_at unpublishes.
        let update = ArticleUpdate::new(id, now)
            .with_title(validated.title)
            .with_slug(validated.slug)
            .with_body(ArticleBody::new(command.input.body.clone()))
            .with_published_at(validated.published_at);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = i64::from(updated.id), "article updated");

        let tags = self
            .sync_tags(updated.id, command.input.tag_list.as_deref())
            .await?;

        Ok(ArticleDto::from_parts(updated, tags, now))
    }
}
