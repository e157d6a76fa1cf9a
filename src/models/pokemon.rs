use serde::{Deserialize, Serialize};

/// One card in the browser grid: a listing entry joined with its sprite.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
    pub image: Option<String>,
}

impl PokemonSummary {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        PokemonSummary {
            name: name.into(),
            image,
        }
    }
}

/// Body of `GET {base}/pokemon?offset=&limit=`.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonListing {
    pub results: Vec<NamedResource>,
}

/// A `{name, url}` pair pointing at a detail resource.
#[derive(Deserialize, Debug, Clone)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// The part of a detail resource we read.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonDetail {
    pub sprites: Sprites,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sprites {
    pub front_default: Option<String>,
}
