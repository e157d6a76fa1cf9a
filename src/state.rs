//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration, sessions, the Pokémon catalog and its source, page
//! templates and metrics.

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::pokeapi::{Catalog, PokemonSource};
use crate::session::SessionStore;
use crate::views::Views;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// One auth store per browser session.
    pub sessions: Arc<dyn SessionStore>,
    /// The browser's list state.
    pub catalog: Arc<Catalog>,
    /// Where catalog loads fetch from.
    pub source: Arc<dyn PokemonSource>,
    /// Compiled page templates.
    pub views: Arc<Views>,
    /// Prometheus metrics collector.
    pub metrics: Metrics,
}
