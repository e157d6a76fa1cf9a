//! Application startup and server initialization.
//!
//! Builds the shared state (sessions, catalog, PokeAPI client, templates,
//! metrics), kicks off the first catalog load and serves the router.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::pokeapi::{Catalog, PokeApiClient, PokemonSource};
use crate::routes;
use crate::session::create_session_store;
use crate::state::AppState;
use crate::views::Views;

/// Assembles the application state from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or a template fails
/// to compile.
pub fn build_state(
    config: Arc<ConfigV1>,
    source: Option<Arc<dyn PokemonSource>>,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let source: Arc<dyn PokemonSource> = match source {
        Some(source) => source,
        None => Arc::new(PokeApiClient::new(&config.pokeapi)?),
    };

    Ok(AppState {
        sessions: create_session_store(&config.session),
        catalog: Arc::new(Catalog::new(config.pokeapi.offset, config.pokeapi.limit)),
        source,
        views: Arc::new(Views::new()?),
        metrics: Metrics::new(),
        config,
    })
}

/// Starts the first catalog load in the background. Failures are recorded on
/// the catalog and shown by the browser views.
pub fn spawn_initial_load(state: &AppState) -> tokio::task::JoinHandle<()> {
    let state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = state
            .catalog
            .load(state.source.as_ref(), &state.metrics)
            .await
        {
            warn!("Initial catalog load failed; the browser will show the error: {}", e);
        }
    })
}

/// Initializes and runs the application server.
///
/// Binds to the address specified in the configuration and starts serving
/// requests.
///
/// # Errors
///
/// Returns an error if the state cannot be built, the server fails to bind
/// to the specified address, or it encounters a runtime error.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(config.clone(), None)?;
    spawn_initial_load(&state);

    info!("Starting server on {}", config.bind_address);

    let app = routes::create_router(state);
    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
