// src/presentation/http/controllers/sessions.rs
use crate::application::commands::auth::LoginCommand;
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::extractors::SESSION_COOKIE;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    http::{
        HeaderValue, StatusCode,
        header::{LOCATION, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// The login "form" itself; real rendering belongs to a frontend, the
/// server only needs the route to exist as the redirect target.
pub async fn new() -> Json<serde_json::Value> {
    Json(json!({ "form": "login", "fields": ["email", "password"] }))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Form(form): Form<LoginForm>,
) -> HttpResult<Response> {
    let session_id = state
        .services
        .auth
        .login(LoginCommand {
            email: form.email,
            password: form.password,
        })
        .await
        .map_err(|err| match err {
            // A bad credential re-renders the form with an error
            // status rather than challenging for HTTP auth.
            crate::application::error::ApplicationError::Unauthorized(_) => {
                HttpError::from_error(crate::application::error::ApplicationError::validation(
                    "base",
                    "invalid email or password",
                ))
            }
            other => HttpError::from_error(other),
        })?;

    Ok(redirect_with_cookie(
        "/admin",
        &format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax"),
    ))
}

pub async fn destroy(Extension(state): Extension<HttpState>, parts: Parts) -> Response {
    if let Some(session_id) = crate::presentation::http::extractors::session_cookie(&parts) {
        if let Err(err) = state.services.auth.logout(&session_id).await {
            tracing::warn!(error = %err, "logout failed to revoke session");
        }
    }

    redirect_with_cookie(
        "/",
        &format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0"),
    )
}

fn redirect_with_cookie(location: &str, cookie: &str) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(location) {
        headers.insert(LOCATION, value);
    }
    if let Ok(value) = HeaderValue::from_str(cookie) {
        headers.insert(SET_COOKIE, value);
    }
    response
}
