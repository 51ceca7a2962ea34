use crate::domain::article::Article;
use crate::domain::tag::{Tag, render_tag_list};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    /// Interface form of the associations, ready for the edit form.
    pub tag_list: String,
}

impl ArticleDto {
    /// `published` is derived through the domain predicate, so a
    /// scheduled article reads as unpublished until its time passes.
    pub fn from_parts(article: Article, tags: Vec<Tag>, now: DateTime<Utc>) -> Self {
        let published = article.is_published(now);
        let tag_list = render_tag_list(&tags);
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            published,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            tags: tags.into_iter().map(|tag| tag.name.into_inner()).collect(),
            tag_list,
        }
    }
}
