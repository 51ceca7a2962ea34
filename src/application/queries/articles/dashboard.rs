// src/application/queries/articles/dashboard.rs
use super::ArticleQueryService;
use crate::application::{dto::DashboardDto, error::ApplicationResult};

/// How many recently created articles the dashboard shows.
pub const RECENT_ARTICLES: u32 = 10;

impl ArticleQueryService {
    /// Direct counts plus the latest creations, recomputed per request;
    /// nothing here is cached.
    pub async fn dashboard(&self) -> ApplicationResult<DashboardDto> {
        let now = self.clock.now();
        let counts = self.read_repo.counts(now).await?;
        let recent = self.read_repo.recent_by_created(RECENT_ARTICLES).await?;
        let recent_articles = self.assemble(recent, now).await?;

        Ok(DashboardDto {
            total_articles: counts.total,
            published_count: counts.published,
            draft_count: counts.drafts,
            recent_articles,
        })
    }
}
