use crate::application::dto::articles::ArticleDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub total_articles: u64,
    pub published_count: u64,
    pub draft_count: u64,
    pub recent_articles: Vec<ArticleDto>,
}
