// src/application/queries/articles/feed.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{FeedDto, FeedItemDto},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleListQuery, ArticleSort, EXCERPT_CHARS, PageRequest, StatusFilter,
    },
};

/// Feeds carry at most this many items.
pub const FEED_ITEMS: u32 = 20;

/// Channel metadata for the feed, fixed at boot from configuration.
#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub site_title: String,
    pub site_url: String,
    pub site_description: String,
    pub author: String,
}

impl ArticleQueryService {
    /// The 20 most recent published articles, newest first. Drafts and
    /// scheduled articles never appear; item descriptions are plain-text
    /// excerpts, categories are the tag names.
    pub async fn feed(&self) -> ApplicationResult<FeedDto> {
        let now = self.clock.now();
        let query = ArticleListQuery {
            status: StatusFilter::Published,
            tag: None,
            sort: ArticleSort::PublishedAtDesc,
            page: PageRequest::new(1, FEED_ITEMS),
        };

        let (articles, _) = self.read_repo.list(&query, now).await?;
        let ids: Vec<_> = articles.iter().map(|article| article.id).collect();
        let mut tags_by_article = self.tag_repo.tags_for_articles(&ids).await?;

        let meta = &self.feed_meta;
        let items = articles
            .into_iter()
            .filter_map(|article| {
                // Listing already filtered on the predicate; the guard
                // keeps the invariant local.
                let published_at = article.published_at?;
                let categories = tags_by_article
                    .remove(&i64::from(article.id))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|tag| tag.name.into_inner())
                    .collect();
                Some(FeedItemDto {
                    link: format!("{}/articles/{}", meta.site_url, article.slug),
                    description: article.excerpt(EXCERPT_CHARS),
                    title: article.title.into_inner(),
                    published_at,
                    categories,
                })
            })
            .collect();

        Ok(FeedDto {
            title: meta.site_title.clone(),
            link: meta.site_url.clone(),
            description: meta.site_description.clone(),
            author: meta.author.clone(),
            items,
        })
    }
}
