// src/presentation/http/controllers/admin_articles.rs
use crate::application::{
    commands::articles::{
        ArticleInput, CreateArticleCommand, DeleteArticleCommand, TogglePublishCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, Page},
    queries::articles::{AdminListQuery, GetArticleByIdQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::{Path, Query},
    response::Redirect,
};
use serde::Deserialize;

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Admin article form payload. Everything optional except title/body so
/// partially filled forms still reach validation and come back with
/// field errors instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub tag_list: Option<String>,
}

impl From<ArticleForm> for ArticleInput {
    fn from(form: ArticleForm) -> Self {
        Self {
            title: form.title,
            slug: form.slug,
            body: form.body,
            published_at: form.published_at,
            tag_list: form.tag_list,
        }
    }
}

pub async fn index(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_admin(AdminListQuery {
            status: params.status,
            tag: params.tag,
            sort: params.sort,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .create_article(CreateArticleCommand { input: form.into() })
        .await
        .into_http()?;

    Ok(Redirect::to("/admin/articles"))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            input: form.into(),
        })
        .await
        .into_http()?;

    Ok(Redirect::to("/admin/articles"))
}

pub async fn destroy(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to("/admin/articles"))
}

pub async fn toggle_publish(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .toggle_publish(TogglePublishCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to("/admin/articles"))
}
