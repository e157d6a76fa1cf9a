//! The Pokémon browser: HTML grid, JSON listing and reload.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::debug;

use crate::pokeapi::CatalogSnapshot;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers the Pokémon browser routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pokemon", get(browse))
        .route("/pokemon/refresh", post(refresh))
        .route("/api/pokemon", get(list))
}

#[derive(Deserialize, Debug, Default)]
struct SearchQuery {
    #[serde(default)]
    search: String,
}

async fn browse(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, HTTPError> {
    let snapshot = state.catalog.search(&query.search).await;
    Ok(state.views.pokemon(&query.search, &snapshot)?)
}

/// `{"pokemon": [{"name", "image"}], "error": string|null}`
async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<CatalogSnapshot> {
    Json(state.catalog.search(&query.search).await)
}

/// Reloads the catalog. A failure is kept on the catalog and shown by the
/// browser page.
async fn refresh(State(state): State<AppState>) -> Redirect {
    match state
        .catalog
        .load(state.source.as_ref(), &state.metrics)
        .await
    {
        Ok(count) => debug!("Catalog refreshed with {} entries", count),
        Err(e) => debug!("Catalog refresh failed: {}", e),
    }
    Redirect::to("/pokemon")
}
