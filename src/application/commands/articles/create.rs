// src/application/commands/articles/create.rs
use super::{ArticleCommandService, input::ArticleInput};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleBody, NewArticle},
        tag::Tag,
    },
};

pub struct CreateArticleCommand {
    pub input: ArticleInput,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let validated = self.validate_input(&command.input, None, None).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title: validated.title,
            slug: validated.slug,
            body: ArticleBody::new(command.input.body.clone()),
            published_at: validated.published_at,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), slug = %created.slug, "article created");

        let tags = self
            .sync_tags(created.id, command.input.tag_list.as_deref())
            .await?;

        Ok(ArticleDto::from_parts(created, tags, now))
    }

    /// Resolve the submitted tag list and swap the associations over to
    /// it. `None` leaves the current set untouched.
    pub(super) async fn sync_tags(
        &self,
        article_id: crate::domain::article::ArticleId,
        tag_list: Option<&str>,
    ) -> ApplicationResult<Vec<Tag>> {
        match tag_list {
            Some(raw) => {
                let tags = self.tag_resolver.resolve(raw).await?;
                let ids: Vec<_> = tags.iter().map(|tag| tag.id).collect();
                self.tag_repo.replace_for_article(article_id, &ids).await?;
                Ok(tags)
            }
            None => Ok(self.tag_repo.tags_for_article(article_id).await?),
        }
    }
}
