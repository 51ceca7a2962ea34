// src/domain/article/listing.rs
use crate::domain::article::entity::Article;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Visibility filter for listings. `Published` and `Drafts` mirror the
/// repository scopes; the admin index defaults to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Drafts,
}

impl StatusFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("published") => Self::Published,
            Some("drafts") => Self::Drafts,
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    /// `published_at` descending with drafts sorted last. Databases
    /// disagree on where NULL lands in a DESC sort, so the rule is
    /// spelled out both here and in the SQL (`NULLS LAST`).
    #[default]
    PublishedAtDesc,
    TitleAsc,
    CreatedAtDesc,
}

impl ArticleSort {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("title") => Self::TitleAsc,
            Some("created_at") => Self::CreatedAtDesc,
            _ => Self::PublishedAtDesc,
        }
    }
}

/// The canonical ordering rule for the default admin sort, usable on
/// in-memory collections. The SQL repositories must order identically.
pub fn published_at_nulls_last(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare_for_sort(sort: ArticleSort, a: &Article, b: &Article) -> Ordering {
    match sort {
        ArticleSort::PublishedAtDesc => published_at_nulls_last(a.published_at, b.published_at)
            .then_with(|| b.created_at.cmp(&a.created_at)),
        ArticleSort::TitleAsc => a.title.as_str().cmp(b.title.as_str()),
        ArticleSort::CreatedAtDesc => b.created_at.cmp(&a.created_at),
    }
}

/// Offset/limit page request. Pages are 1-based at the interface; the
/// repositories receive a ready offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, 100),
        }
    }

    // u64 so an absurd page number widens instead of overflowing u32.
    pub fn offset(&self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

/// Everything the article listing query needs, shared by the public and
/// admin indexes (the public surface pins `status` to `Published`).
#[derive(Debug, Clone)]
pub struct ArticleListQuery {
    pub status: StatusFilter,
    /// Case-insensitive exact tag name; normalized before it reaches
    /// the repository.
    pub tag: Option<String>,
    pub sort: ArticleSort,
    pub page: PageRequest,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleCounts {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
}
