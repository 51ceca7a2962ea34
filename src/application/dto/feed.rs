use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel-level feed data; rendering to RSS XML happens at the HTTP
/// layer. Items arrive newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDto {
    pub title: String,
    pub link: String,
    pub description: String,
    pub author: String,
    pub items: Vec<FeedItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItemDto {
    pub title: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
    /// Plain-text excerpt of the body.
    pub description: String,
    pub categories: Vec<String>,
}
