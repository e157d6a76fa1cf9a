//! Mock authentication state, one store per browser session.

pub mod auth_store;
pub mod extract;
pub mod store;

pub use auth_store::{AuthState, AuthStore};
pub use extract::{CurrentSession, session_cookie};
pub use store::{InMemorySessionStore, SessionId, SessionStore, create_session_store};
