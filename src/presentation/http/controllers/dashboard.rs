// src/presentation/http/controllers/dashboard.rs
use crate::application::dto::DashboardDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn show(
    Extension(state): Extension<HttpState>,
    _session: AdminSession,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .article_queries
        .dashboard()
        .await
        .into_http()
        .map(Json)
}
