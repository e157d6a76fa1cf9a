//! Route guard for pages that need a logged-in session.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Redirect, Response};
use http::request::Parts;
use tracing::debug;

use crate::models::UserRecord;
use crate::session::{AuthState, CurrentSession};
use crate::state::AppState;

/// Where unauthenticated visitors are sent.
pub const ENTRY_PATH: &str = "/";

/// Outcome of guarding some content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Allow(T),
    Redirect(&'static str),
}

/// Passes `content` through when the session is authenticated, otherwise
/// redirects to the entry page. Depends on nothing but the flag.
pub fn guard<T>(state: &AuthState, content: T) -> Guarded<T> {
    if state.is_authenticated {
        Guarded::Allow(content)
    } else {
        Guarded::Redirect(ENTRY_PATH)
    }
}

impl<T: IntoResponse> IntoResponse for Guarded<T> {
    fn into_response(self) -> Response {
        match self {
            Guarded::Allow(content) => content.into_response(),
            Guarded::Redirect(to) => Redirect::to(to).into_response(),
        }
    }
}

/// Extractor for guarded handlers. Rejects with a redirect to `/`.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: Option<UserRecord>,
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Authenticated, Redirect> {
        let Ok(current) = CurrentSession::from_request_parts(parts, state).await;
        match guard(&current.state, ()) {
            Guarded::Allow(()) => Ok(Authenticated {
                user: current.state.user,
            }),
            Guarded::Redirect(to) => {
                debug!(path = %parts.uri.path(), "Guard redirecting unauthenticated request");
                Err(Redirect::to(to))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn state(is_authenticated: bool) -> AuthState {
        AuthState {
            is_authenticated,
            user: None,
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_entry() {
        assert_eq!(guard(&state(false), "secret"), Guarded::Redirect("/"));
    }

    #[test]
    fn test_authenticated_passes_content_unchanged() {
        let content = vec![1, 2, 3];
        assert_eq!(guard(&state(true), content.clone()), Guarded::Allow(content));
    }

    #[test]
    fn test_guard_ignores_user_record() {
        let logged_out_with_user = AuthState {
            is_authenticated: false,
            user: Some(UserRecord::with_username("alice")),
        };
        assert_eq!(guard(&logged_out_with_user, ()), Guarded::Redirect("/"));
    }

    #[test]
    fn test_redirect_response() {
        let response = guard(&state(false), "secret").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }
}
