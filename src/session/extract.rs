use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use http::request::Parts;

use super::auth_store::AuthState;
use super::store::SessionId;
use crate::config::SessionConfig;
use crate::state::AppState;

/// The caller's session id (if the cookie names a valid one) and its state.
/// Requests without a session see the initial, unauthenticated state.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: Option<SessionId>,
    pub state: AuthState,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<CurrentSession, Infallible> {
        let jar = CookieJar::from_headers(&parts.headers);
        let id = jar
            .get(&state.config.session.cookie_name)
            .and_then(|cookie| SessionId::parse(cookie.value()));

        let auth = match &id {
            Some(id) => state.sessions.state(id).await,
            None => AuthState::default(),
        };
        Ok(CurrentSession { id, state: auth })
    }
}

/// HttpOnly cookie carrying the session id.
pub fn session_cookie(config: &SessionConfig, id: SessionId) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}
