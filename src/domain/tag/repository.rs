use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{Tag, TagId, TagName};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;

    /// Insert a tag with the given (already normalized) name. A unique
    /// violation surfaces as `DomainError::Conflict`; the resolver treats
    /// that as "someone else just created it" and re-reads.
    async fn insert(&self, name: &TagName) -> DomainResult<Tag>;

    async fn tags_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>>;

    /// Batch lookup for listings: tags keyed by owning article id.
    async fn tags_for_articles(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<i64, Vec<Tag>>>;

    /// Replace the article's associations with exactly `tag_ids`,
    /// computed as a set difference and applied in one transaction so a
    /// partial failure never leaves a mismatched join set.
    async fn replace_for_article(
        &self,
        article_id: ArticleId,
        tag_ids: &[TagId],
    ) -> DomainResult<()>;
}
