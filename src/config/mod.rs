// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod logging;
pub mod pokeapi;
pub mod session;
pub mod types;

pub use logging::*;
pub use pokeapi::*;
pub use session::*;
pub use types::*;
