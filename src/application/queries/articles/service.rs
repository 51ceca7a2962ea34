// src/application/queries/articles/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, ports::time::Clock},
    domain::{article::Article, article::ArticleReadRepository, tag::TagRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) feed_meta: super::feed::FeedMeta,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
        feed_meta: super::feed::FeedMeta,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            clock,
            feed_meta,
        }
    }

    /// Batch tag lookup for listings, one query for the whole page.
    pub(super) async fn assemble(
        &self,
        articles: Vec<Article>,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let ids: Vec<_> = articles.iter().map(|article| article.id).collect();
        let mut tags_by_article = self.tag_repo.tags_for_articles(&ids).await?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let tags = tags_by_article
                    .remove(&i64::from(article.id))
                    .unwrap_or_default();
                ArticleDto::from_parts(article, tags, now)
            })
            .collect())
    }
}
