// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// The single visibility predicate: an article is publicly visible
    /// iff it carries a publish timestamp that is not in the future.
    /// Every surface (listing, detail, feed, dashboard counts) goes
    /// through this rule.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        matches!(self.published_at, Some(at) if at <= now)
    }

    /// A draft has no publish timestamp at all. A scheduled article
    /// (future `published_at`) is neither a draft nor published yet.
    pub fn is_draft(&self) -> bool {
        self.published_at.is_none()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published_at = None;
        self.updated_at = now;
    }

    /// Plain-text excerpt of the body, truncated on a word boundary.
    /// Markup is stripped before measuring; the `...` suffix counts
    /// against `max_chars`, so the result never exceeds it.
    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt_of(self.body.as_str(), max_chars)
    }
}

pub const EXCERPT_CHARS: usize = 500;

fn excerpt_of(body: &str, max_chars: usize) -> String {
    const OMISSION: &str = "...";

    let plain = strip_markup(body);
    if plain.chars().count() <= max_chars {
        return plain;
    }

    let budget = max_chars.saturating_sub(OMISSION.len());
    let head: String = plain.chars().take(budget).collect();
    let cut = match head.rfind(' ') {
        Some(idx) => &head[..idx],
        None => head.as_str(),
    };
    format!("{}{}", cut.trim_end(), OMISSION)
}

// Bodies are stored as the rich-text collaborator hands them over, which
// may include HTML fragments. Good enough for feed descriptions; not a
// sanitizer.
fn strip_markup(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut in_tag = false;
    for ch in body.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field-wise update payload. `published_at` is wrapped a second time so
/// "leave untouched" and "clear the timestamp" stay distinguishable.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body: Option<ArticleBody>,
    pub published_at: Option<Option<DateTime<Utc>>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            published_at: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}
