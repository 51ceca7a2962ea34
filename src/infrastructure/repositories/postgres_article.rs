// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleCounts, ArticleId, ArticleListQuery, ArticleReadRepository,
    ArticleSlug, ArticleSort, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
    StatusFilter,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

const ARTICLE_COLUMNS: &str = "id, title, slug, body, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body),
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            body,
            published_at,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, slug, body, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, slug, body, published_at, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            body,
            published_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, title, slug, body, published_at, created_at, updated_at");

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    /// Shared WHERE clause for listing and its count: status scope, tag
    /// join filter, always against the same `now`.
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        query: &'a ArticleListQuery,
        now: DateTime<Utc>,
    ) {
        builder.push(" WHERE TRUE");

        match query.status {
            StatusFilter::Published => {
                builder.push(" AND a.published_at IS NOT NULL AND a.published_at <= ");
                builder.push_bind(now);
            }
            StatusFilter::Drafts => {
                builder.push(" AND a.published_at IS NULL");
            }
            StatusFilter::All => {}
        }

        if let Some(tag) = query.tag.as_deref() {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_tags at \
                 JOIN tags t ON t.id = at.tag_id \
                 WHERE at.article_id = a.id AND t.name = ",
            );
            builder.push_bind(tag);
            builder.push(")");
        }
    }

    // `NULLS LAST` is spelled out: Postgres puts NULL first in a DESC
    // sort, and listings must show drafts after everything dated.
    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ArticleSort) {
        match sort {
            ArticleSort::PublishedAtDesc => {
                builder.push(" ORDER BY a.published_at DESC NULLS LAST, a.created_at DESC");
            }
            ArticleSort::TitleAsc => {
                builder.push(" ORDER BY a.title ASC");
            }
            ArticleSort::CreatedAtDesc => {
                builder.push(" ORDER BY a.created_at DESC");
            }
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, slug, body, published_at, created_at, updated_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, slug, body, published_at, created_at, updated_at
             FROM articles WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<Vec<String>> {
        // Generated slugs only contain [a-z0-9-], so the prefix needs no
        // LIKE-escaping.
        let rows = sqlx::query(
            "SELECT slug FROM articles
             WHERE slug LIKE $1 || '%' AND ($2::bigint IS NULL OR id <> $2)",
        )
        .bind(prefix)
        .bind(exclude.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| row.get::<String, _>("slug"))
            .collect())
    }

    async fn title_taken(
        &self,
        title: &ArticleTitle,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(
                SELECT 1 FROM articles
                WHERE title = $1 AND ($2::bigint IS NULL OR id <> $2)
             ) AS taken",
        )
        .bind(title.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.get::<bool, _>("taken"))
    }

    async fn list(
        &self,
        query: &ArticleListQuery,
        now: DateTime<Utc>,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        Self::apply_conditions(&mut builder, query, now);
        Self::apply_ordering(&mut builder, query.sort);
        builder.push(" LIMIT ");
        builder.push_bind(query.page.limit() as i64);
        builder.push(" OFFSET ");
        builder.push_bind(query.page.offset() as i64);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) AS total FROM articles a");
        Self::apply_conditions(&mut count_builder, query, now);

        let total = count_builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?
            .get::<i64, _>("total");

        Ok((articles, total.max(0) as u64))
    }

    async fn counts(&self, now: DateTime<Utc>) -> DomainResult<ArticleCounts> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE published_at IS NOT NULL AND published_at <= $1)
                        AS published,
                    COUNT(*) FILTER (WHERE published_at IS NULL) AS drafts
             FROM articles",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ArticleCounts {
            total: row.get::<i64, _>("total").max(0) as u64,
            published: row.get::<i64, _>("published").max(0) as u64,
            drafts: row.get::<i64, _>("drafts").max(0) as u64,
        })
    }

    async fn recent_by_created(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, slug, body, published_at, created_at, updated_at
             FROM articles ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
