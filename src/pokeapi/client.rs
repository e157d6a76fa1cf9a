use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::task::JoinError;
use tracing::{debug, info};

use super::join::join_indexed;
use crate::config::PokeApiConfig;
use crate::models::PokemonSummary;
use crate::models::pokemon::{PokemonDetail, PokemonListing};

/// Why a page could not be assembled.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("detail request task failed: {0}")]
    Join(#[from] JoinError),
}

/// Something that can produce a page of Pokémon summaries.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<PokemonSummary>, FetchError>;
}

/// Client for the PokeAPI listing and detail endpoints.
#[derive(Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &PokeApiConfig) -> Result<Self, FetchError> {
        info!(
            "Creating PokeAPI client for '{}' (timeout: {:?} ms)",
            config.base_url, config.timeout_in_ms
        );
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_in_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(PokeApiClient {
            client: builder.build().map_err(FetchError::Client)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    /// One listing request, then one detail request per entry, all in flight
    /// together. The result keeps the listing order.
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Vec<PokemonSummary>, FetchError> {
        let url = format!("{}/pokemon", self.base_url);
        debug!("Fetching Pokémon listing from {} (offset={}, limit={})", url, offset, limit);
        let request = self
            .client
            .get(&url)
            .query(&[("offset", offset), ("limit", limit)]);
        let listing: PokemonListing = send_json(request, &url).await?;
        debug!("Listing returned {} entries", listing.results.len());

        let details = listing.results.into_iter().map(|entry| {
            let client = self.client.clone();
            async move {
                let detail: PokemonDetail = send_json(client.get(&entry.url), &entry.url).await?;
                Ok::<_, FetchError>(PokemonSummary::new(entry.name, detail.sprites.front_default))
            }
        });
        join_indexed(details).await
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T, FetchError> {
    let response = request.send().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    // A timeout while the body is still arriving is a transport failure.
    let body = response.bytes().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
