// src/presentation/http/extractors.rs
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "blog_session";

/// A validated admin session, extracted from the session cookie. Any
/// admin route that takes this either has a live session or answers
/// with a redirect to the login route before the handler runs.
#[derive(Debug, Clone)]
pub struct AdminSession(pub String);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (StatusCode::INTERNAL_SERVER_ERROR, "application state missing").into_response()
            })?;

        let Some(session_id) = session_cookie(parts) else {
            return Err(Redirect::to("/login").into_response());
        };

        let valid = app_state
            .services
            .auth
            .session_valid(&session_id)
            .await
            .unwrap_or(false);
        if !valid {
            return Err(Redirect::to("/login").into_response());
        }

        Ok(Self(session_id))
    }
}

pub fn session_cookie(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
}
