//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the login/signup shell, the guarded dashboard, the Pokémon browser,
//! health checks and metrics.

mod auth_routes;
mod dashboard_routes;
mod health_routes;
mod metrics_routes;
mod pokemon_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router and attaches
/// the application state for access in handlers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes::routes())
        .merge(dashboard_routes::routes())
        .merge(pokemon_routes::routes())
        .merge(health_routes::routes())
        .merge(metrics_routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
