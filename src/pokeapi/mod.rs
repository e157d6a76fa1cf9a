//! The Pokémon browser's data path: fetch a page, join the details, filter.

pub mod catalog;
pub mod client;
pub mod filter;
pub mod join;

pub use catalog::{Catalog, CatalogSnapshot};
pub use client::{FetchError, PokeApiClient, PokemonSource};
pub use filter::filter;
pub use join::join_indexed;
