// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleDto, Page},
    queries::articles::{GetPublishedArticleQuery, PublicListQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct PublicListParams {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
}

pub async fn index(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublicListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_public(PublicListQuery {
            tag: params.tag,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_published_by_slug(GetPublishedArticleQuery { slug })
        .await
        .into_http()
        .map(Json)
}
