// src/application/queries/articles/get.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleSlug},
};

pub struct GetPublishedArticleQuery {
    pub slug: String,
}

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Public detail lookup. Drafts and scheduled articles answer 404:
    /// an unpublished slug must not be discoverable from outside.
    pub async fn get_published_by_slug(
        &self,
        query: GetPublishedArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let now = self.clock.now();

        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| article.is_published(now))
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let tags = self.tag_repo.tags_for_article(article.id).await?;
        Ok(ArticleDto::from_parts(article, tags, now))
    }

    /// Admin fetch by id, drafts included.
    pub async fn get_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let now = self.clock.now();

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let tags = self.tag_repo.tags_for_article(article.id).await?;
        Ok(ArticleDto::from_parts(article, tags, now))
    }
}
