// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    admin_articles, articles, dashboard, feed, sessions,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/articles", get(articles::index))
        .route("/articles/{slug}", get(articles::show))
        .route("/feed", get(feed::rss))
        .route("/login", get(sessions::new).post(sessions::create))
        .route("/logout", post(sessions::destroy))
        .route("/admin", get(dashboard::show))
        .route(
            "/admin/articles",
            get(admin_articles::index).post(admin_articles::create),
        )
        .route(
            "/admin/articles/{id}",
            get(admin_articles::show)
                .put(admin_articles::update)
                .delete(admin_articles::destroy),
        )
        .route(
            "/admin/articles/{id}/toggle-publish",
            post(admin_articles::toggle_publish),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
