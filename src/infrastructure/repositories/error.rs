use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE: &str = "articles_title_key";
const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_ARTICLE_TAG_FK: &str = "article_tags_article_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE => DomainError::Conflict("title already exists".into()),
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_TAG_NAME => DomainError::Conflict("tag name already exists".into()),
                    CNT_ARTICLE_TAG_FK => DomainError::NotFound("article not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
