// tests/support/builders.rs
use chrono::{DateTime, Utc};

use tinta_core::domain::article::{Article, ArticleBody, ArticleId, ArticleSlug, ArticleTitle};

/// `2024-03-01T10:00:00Z` style timestamps for fixtures.
pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid rfc3339 timestamp")
        .with_timezone(&Utc)
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            slug: format!("article-{id}"),
            body: "Hello.".into(),
            published_at: None,
            created_at: ts("2024-01-01T00:00:00Z"),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.into();
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).expect("positive fixture id"),
            title: ArticleTitle::new(self.title).expect("non-blank fixture title"),
            slug: ArticleSlug::new(self.slug).expect("non-blank fixture slug"),
            body: ArticleBody::new(self.body),
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
