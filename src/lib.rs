//! Library exports for dexboard, shared between the binary and tests.

pub mod config;
pub mod guard;
pub mod metrics;
pub mod models;
pub mod pokeapi;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod utils;
pub mod validation;
pub mod views;
