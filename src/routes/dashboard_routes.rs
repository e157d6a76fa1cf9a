//! The guarded dashboard.

use axum::extract::State;
use axum::response::Html;
use axum::{Router, routing::get};

use crate::guard::Authenticated;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers the dashboard route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Only reachable with an authenticated session; everyone else is
/// redirected to `/` by the `Authenticated` extractor.
async fn dashboard(
    auth: Authenticated,
    State(state): State<AppState>,
) -> Result<Html<String>, HTTPError> {
    Ok(state.views.dashboard(auth.user.as_ref())?)
}
