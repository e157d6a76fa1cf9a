//! Plain data carried between the stores, the fetcher and the views.

pub mod forms;
pub mod pokemon;
pub mod user;

pub use forms::{LoginForm, SignupForm};
pub use pokemon::PokemonSummary;
pub use user::UserRecord;
