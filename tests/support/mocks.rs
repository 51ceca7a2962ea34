// tests/support/mocks.rs
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use tinta_core::application::error::{ApplicationError, ApplicationResult};
use tinta_core::application::ports::{security::PasswordHasher, time::Clock};
use tinta_core::domain::article::{
    Article, ArticleCounts, ArticleId, ArticleListQuery, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle, StatusFilter,
    compare_for_sort,
};
use tinta_core::domain::errors::{DomainError, DomainResult};
use tinta_core::domain::tag::{Tag, TagId, TagName, TagRepository};

/// Clock pinned to a fixed instant, adjustable mid-test.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Hasher whose "hash" of a password is `hashed:<password>`, so tests
/// get real match/mismatch behaviour without argon2 cost.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("password mismatch"))
        }
    }
}

#[derive(Default)]
struct ArticlesState {
    articles: Vec<Article>,
    next_id: i64,
}

/// In-memory article store implementing both repository traits. The tag
/// filter in `list` consults the tag store it was built with, the same
/// way the SQL listing joins the association table.
pub struct InMemoryArticles {
    state: Mutex<ArticlesState>,
    tags: std::sync::Arc<InMemoryTags>,
}

impl InMemoryArticles {
    pub fn new(tags: std::sync::Arc<InMemoryTags>) -> Self {
        Self {
            state: Mutex::new(ArticlesState {
                articles: Vec::new(),
                next_id: 1,
            }),
            tags,
        }
    }

    /// Seed an article verbatim, keeping the id allocator ahead of it.
    pub fn seed(&self, article: Article) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(article.id.0 + 1);
        state.articles.push(article);
    }

    pub fn all(&self) -> Vec<Article> {
        self.state.lock().unwrap().articles.clone()
    }

    fn matches(&self, article: &Article, query: &ArticleListQuery, now: DateTime<Utc>) -> bool {
        let status_ok = match query.status {
            StatusFilter::All => true,
            StatusFilter::Published => article.is_published(now),
            StatusFilter::Drafts => article.is_draft(),
        };
        if !status_ok {
            return false;
        }
        match &query.tag {
            None => true,
            Some(tag) => self.tags.articles_with_tag(tag).contains(&article.id.0),
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state
            .articles
            .iter()
            .any(|existing| existing.slug.as_str() == new.slug.as_str())
        {
            return Err(DomainError::Conflict("articles_slug_key".into()));
        }
        if state
            .articles
            .iter()
            .any(|existing| existing.title.as_str() == new.title.as_str())
        {
            return Err(DomainError::Conflict("articles_title_key".into()));
        }
        let id = ArticleId::new(state.next_id)?;
        state.next_id += 1;
        let article = Article {
            id,
            title: new.title,
            slug: new.slug,
            body: new.body,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(published_at) = update.published_at {
            article.published_at = published_at;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|article| article.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        drop(state);
        self.tags.detach_article(id.0);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| article.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|article| Some(article.id) != exclude)
            .filter(|article| article.slug.as_str().starts_with(prefix))
            .map(|article| article.slug.as_str().to_string())
            .collect())
    }

    async fn title_taken(
        &self,
        title: &ArticleTitle,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|article| Some(article.id) != exclude)
            .any(|article| article.title.as_str() == title.as_str()))
    }

    async fn list(
        &self,
        query: &ArticleListQuery,
        now: DateTime<Utc>,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut matching: Vec<Article> = {
            let state = self.state.lock().unwrap();
            state.articles.clone()
        };
        matching.retain(|article| self.matches(article, query, now));
        matching.sort_by(|a, b| compare_for_sort(query.sort, a, b));

        let total = matching.len() as u64;
        let page: Vec<Article> = matching
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn counts(&self, now: DateTime<Utc>) -> DomainResult<ArticleCounts> {
        let state = self.state.lock().unwrap();
        let total = state.articles.len() as u64;
        let published = state
            .articles
            .iter()
            .filter(|article| article.is_published(now))
            .count() as u64;
        let drafts = state
            .articles
            .iter()
            .filter(|article| article.is_draft())
            .count() as u64;
        Ok(ArticleCounts {
            total,
            published,
            drafts,
        })
    }

    async fn recent_by_created(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut articles = self.all();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        articles.truncate(limit as usize);
        Ok(articles)
    }
}

struct TagsState {
    tags: Vec<Tag>,
    next_id: i64,
    associations: HashMap<i64, Vec<TagId>>,
}

impl Default for TagsState {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            next_id: 1,
            associations: HashMap::new(),
        }
    }
}

/// In-memory tag store. `fail_next_insert_of` simulates a concurrent
/// writer: the named tag gets created, but the caller sees the unique
/// violation, exercising the find-or-create retry path.
#[derive(Default)]
pub struct InMemoryTags {
    state: Mutex<TagsState>,
    conflict_once_on: Mutex<HashSet<String>>,
}

impl InMemoryTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_insert_of(&self, name: &str) {
        self.conflict_once_on.lock().unwrap().insert(name.into());
    }

    pub fn tag_count(&self) -> usize {
        self.state.lock().unwrap().tags.len()
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .tags
            .iter()
            .map(|tag| tag.name.as_str().to_string())
            .collect()
    }

    pub fn articles_with_tag(&self, name: &str) -> HashSet<i64> {
        let state = self.state.lock().unwrap();
        let Some(tag) = state.tags.iter().find(|tag| tag.name.as_str() == name) else {
            return HashSet::new();
        };
        state
            .associations
            .iter()
            .filter(|(_, tag_ids)| tag_ids.contains(&tag.id))
            .map(|(article_id, _)| *article_id)
            .collect()
    }

    pub fn detach_article(&self, article_id: i64) {
        self.state.lock().unwrap().associations.remove(&article_id);
    }

    fn create(state: &mut TagsState, name: &TagName) -> Tag {
        let tag = Tag {
            id: TagId(state.next_id),
            name: name.clone(),
        };
        state.next_id += 1;
        state.tags.push(tag.clone());
        tag
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tags
            .iter()
            .find(|tag| tag.name.as_str() == name.as_str())
            .cloned())
    }

    async fn insert(&self, name: &TagName) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        if state
            .tags
            .iter()
            .any(|tag| tag.name.as_str() == name.as_str())
        {
            return Err(DomainError::Conflict("tags_name_key".into()));
        }
        let tag = Self::create(&mut state, name);
        let mut conflicts = self.conflict_once_on.lock().unwrap();
        if conflicts.remove(name.as_str()) {
            return Err(DomainError::Conflict("tags_name_key".into()));
        }
        Ok(tag)
    }

    async fn tags_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        let tag_ids = state
            .associations
            .get(&article_id.0)
            .cloned()
            .unwrap_or_default();
        Ok(state
            .tags
            .iter()
            .filter(|tag| tag_ids.contains(&tag.id))
            .cloned()
            .collect())
    }

    async fn tags_for_articles(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<i64, Vec<Tag>>> {
        let mut result = HashMap::new();
        for id in article_ids {
            let tags = self.tags_for_article(*id).await?;
            if !tags.is_empty() {
                result.insert(id.0, tags);
            }
        }
        Ok(result)
    }

    async fn replace_for_article(
        &self,
        article_id: ArticleId,
        tag_ids: &[TagId],
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if tag_ids.is_empty() {
            state.associations.remove(&article_id.0);
        } else {
            state.associations.insert(article_id.0, tag_ids.to_vec());
        }
        Ok(())
    }
}
