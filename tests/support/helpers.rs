// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use serde_json::Value;
use tower::ServiceExt;

use tinta_core::application::ports::{
    security::PasswordHasher, sessions::SessionStore, time::Clock, util::SlugGenerator,
};
use tinta_core::application::queries::articles::FeedMeta;
use tinta_core::application::services::{ApplicationServices, AuthConfig};
use tinta_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use tinta_core::domain::tag::TagRepository;
use tinta_core::infrastructure::security::session_store::InMemorySessionStore;
use tinta_core::infrastructure::util::DefaultSlugGenerator;
use tinta_core::presentation::http::{HttpState, build_router};

use super::builders::ts;
use super::mocks::{DummyPasswordHasher, FixedClock, InMemoryArticles, InMemoryTags};

pub const TEST_NOW: &str = "2024-06-15T12:00:00Z";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "letmein";
pub const SITE_URL: &str = "https://blog.example.com";

/// Fully wired application over the in-memory stores, with handles to
/// every mock a test might want to poke at.
pub struct TestContext {
    pub articles: Arc<InMemoryArticles>,
    pub tags: Arc<InMemoryTags>,
    pub clock: Arc<FixedClock>,
    pub sessions: Arc<InMemorySessionStore>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_context() -> TestContext {
    let tags = Arc::new(InMemoryTags::new());
    let articles = Arc::new(InMemoryArticles::new(Arc::clone(&tags)));
    let clock = Arc::new(FixedClock::at(ts(TEST_NOW)));
    let sessions = Arc::new(InMemorySessionStore::new());

    let article_read: Arc<dyn ArticleReadRepository> = articles.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
    let tag_repo: Arc<dyn TagRepository> = tags.clone();
    let hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
    let session_store: Arc<dyn SessionStore> = sessions.clone();
    let clock_port: Arc<dyn Clock> = clock.clone();
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        tag_repo,
        hasher,
        session_store,
        clock_port,
        slugger,
        chrono_tz::UTC,
        FeedMeta {
            site_title: "Test Blog".into(),
            site_url: SITE_URL.into(),
            site_description: "A blog used in tests.".into(),
            author: ADMIN_EMAIL.into(),
        },
        AuthConfig {
            admin_email: ADMIN_EMAIL.into(),
            admin_password_hash: format!("hashed:{ADMIN_PASSWORD}"),
            session_ttl: Duration::from_secs(14 * 24 * 60 * 60),
        },
    ));

    TestContext {
        articles,
        tags,
        clock,
        sessions,
        services,
    }
}

pub fn make_test_router() -> (Router, TestContext) {
    let ctx = build_context();
    let state = HttpState {
        services: Arc::clone(&ctx.services),
    };
    (build_router(state), ctx)
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    router.clone().oneshot(request).await.expect("response")
}

pub async fn get_with_cookie(router: &Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request");
    router.clone().oneshot(request).await.expect("response")
}

pub async fn send_form(
    router: &Router,
    method: &str,
    uri: &str,
    form_body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder
        .body(Body::from(form_body.to_string()))
        .expect("request");
    router.clone().oneshot(request).await.expect("response")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `name=value` cookie pair from a Set-Cookie header, attributes
/// stripped, ready to send back in a Cookie header.
pub fn cookie_pair(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .expect("ascii cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

/// Log in through the HTTP surface and return the session cookie pair.
pub async fn login(router: &Router) -> String {
    let body = format!(
        "email={}&password={}",
        urlencode(ADMIN_EMAIL),
        urlencode(ADMIN_PASSWORD)
    );
    let response = send_form(router, "POST", "/login", &body, None).await;
    assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
    cookie_pair(&response)
}

/// Just enough escaping for test form bodies.
pub fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
