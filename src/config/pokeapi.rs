use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the Pokémon listing comes from, and which page is loaded.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct PokeApiConfig {
    /// Base of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Per-request timeout. Unset means requests may take as long as they need.
    #[serde(default)]
    pub timeout_in_ms: Option<u64>,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        PokeApiConfig {
            base_url: default_base_url(),
            offset: 0,
            limit: default_limit(),
            timeout_in_ms: None,
        }
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_limit() -> u32 {
    20
}
