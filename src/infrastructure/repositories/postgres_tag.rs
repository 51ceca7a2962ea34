// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository, association_diff};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Row};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn insert(&self, name: &TagName) -> DomainResult<Tag> {
        let row =
            sqlx::query_as::<_, TagRow>("INSERT INTO tags (name) VALUES ($1) RETURNING id, name")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn tags_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.id, t.name FROM tags t
             JOIN article_tags at ON at.tag_id = t.id
             WHERE at.article_id = $1",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn tags_for_articles(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<i64, Vec<Tag>>> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<i64> = article_ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query(
            "SELECT at.article_id, t.id, t.name FROM tags t
             JOIN article_tags at ON at.tag_id = t.id
             WHERE at.article_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_article: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            let article_id = row.get::<i64, _>("article_id");
            let tag = Tag::try_from(TagRow {
                id: row.get("id"),
                name: row.get("name"),
            })?;
            by_article.entry(article_id).or_default().push(tag);
        }
        Ok(by_article)
    }

    async fn replace_for_article(
        &self,
        article_id: ArticleId,
        tag_ids: &[TagId],
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let article_id = i64::from(article_id);

        let current: Vec<TagId> =
            sqlx::query("SELECT tag_id FROM article_tags WHERE article_id = $1")
                .bind(article_id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx)?
                .into_iter()
                .map(|row| TagId::new(row.get::<i64, _>("tag_id")))
                .collect::<DomainResult<_>>()?;

        let (to_add, to_remove) = association_diff(tag_ids, &current);

        if !to_remove.is_empty() {
            let remove: Vec<i64> = to_remove.into_iter().map(i64::from).collect();
            sqlx::query("DELETE FROM article_tags WHERE article_id = $1 AND tag_id = ANY($2)")
                .bind(article_id)
                .bind(&remove)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        if !to_add.is_empty() {
            let add: Vec<i64> = to_add.into_iter().map(i64::from).collect();
            // ON CONFLICT keeps a concurrent identical save from
            // doubling a pair; the diff already avoids it within one.
            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id)
                 SELECT $1, tag_id FROM UNNEST($2::bigint[]) AS tag_id
                 ON CONFLICT DO NOTHING",
            )
            .bind(article_id)
            .bind(&add)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }
}
