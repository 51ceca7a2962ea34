use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::listing::{ArticleCounts, ArticleListQuery};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article and, via cascade, its tag join rows.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// All slugs starting with `prefix`, minus the article being saved.
    /// One bulk read; the slug service resolves collisions in memory.
    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<Vec<String>>;

    async fn title_taken(
        &self,
        title: &ArticleTitle,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool>;

    /// Filtered, sorted, offset-paginated listing plus the total row
    /// count for the same filters. `now` feeds the published predicate.
    async fn list(
        &self,
        query: &ArticleListQuery,
        now: DateTime<Utc>,
    ) -> DomainResult<(Vec<Article>, u64)>;

    async fn counts(&self, now: DateTime<Utc>) -> DomainResult<ArticleCounts>;

    /// Most recently created articles, drafts included (dashboard).
    async fn recent_by_created(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
