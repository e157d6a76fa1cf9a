use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::client::{FetchError, PokemonSource};
use super::filter::filter;
use crate::metrics::MetricsRecorder;
use crate::models::PokemonSummary;

/// What the browser views render: the current list and the last load error.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub pokemon: Vec<PokemonSummary>,
    pub error: Option<String>,
}

/// In-memory list state for the Pokémon browser.
///
/// A failed load leaves the previous list in place and records the error so
/// the views can show it. Loads are numbered; a load that finishes after a
/// newer one has started is discarded.
pub struct Catalog {
    offset: u32,
    limit: u32,
    state: RwLock<CatalogSnapshot>,
    generation: AtomicU64,
}

impl Catalog {
    pub fn new(offset: u32, limit: u32) -> Self {
        Catalog {
            offset,
            limit,
            state: RwLock::new(CatalogSnapshot::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches the configured page and stores the outcome.
    /// Returns the number of entries now held, or the fetch error.
    pub async fn load<M: MetricsRecorder>(
        &self,
        source: &dyn PokemonSource,
        metrics: &M,
    ) -> Result<usize, FetchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let started = Instant::now();
        let outcome = source.fetch_page(self.offset, self.limit).await;
        let elapsed = started.elapsed().as_secs_f64();

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Discarding superseded catalog load");
            return outcome.map(|_| state.pokemon.len());
        }

        match outcome {
            Ok(pokemon) => {
                metrics.record_fetch("success", elapsed);
                info!(
                    event_name = "catalog.load.success",
                    event_domain = "pokeapi",
                    count = pokemon.len(),
                    "Loaded Pokémon catalog"
                );
                state.pokemon = pokemon;
                state.error = None;
                Ok(state.pokemon.len())
            }
            Err(e) => {
                metrics.record_fetch("error", elapsed);
                error!(
                    event_name = "catalog.load.failure",
                    event_domain = "pokeapi",
                    "Failed to load Pokémon catalog: {}",
                    e
                );
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.state.read().await.clone()
    }

    /// The current list narrowed by `term`, plus the last load error.
    pub async fn search(&self, term: &str) -> CatalogSnapshot {
        let state = self.state.read().await;
        CatalogSnapshot {
            pokemon: filter(&state.pokemon, term),
            error: state.error.clone(),
        }
    }
}
