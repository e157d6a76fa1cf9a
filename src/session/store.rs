use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::auth_store::{AuthState, AuthStore};
use crate::config::SessionConfig;
use crate::models::UserRecord;

/// Opaque identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    /// Parses a cookie value. Anything that is not a UUID is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(SessionId)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Holds one `AuthStore` per session. Sessions nobody has logged into read
/// as the initial state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn state(&self, id: &SessionId) -> AuthState;

    /// Logs `user` into a freshly issued session and returns its id. The
    /// `previous` session, if any, is dropped; ids are never taken from the
    /// client.
    async fn login(&self, previous: Option<&SessionId>, user: UserRecord) -> SessionId;

    async fn logout(&self, id: &SessionId);
}

/// Creates the session store from its config.
pub fn create_session_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    info!(
        forget_user_on_logout = config.forget_user_on_logout,
        max_sessions = config.max_sessions,
        "Using in-memory session store."
    );
    Arc::new(InMemorySessionStore::new(
        config.forget_user_on_logout,
        config.max_sessions,
    ))
}

struct Entry {
    store: AuthStore,
    issued: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<SessionId, Entry>,
    next_issue: u64,
}

impl Sessions {
    /// Drops the oldest sessions until one more fits under `max`.
    fn make_room(&mut self, max: usize) {
        while self.entries.len() >= max.max(1) {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.issued)
                .map(|(id, _)| *id)
            else {
                break;
            };
            debug!(session = %oldest, "Evicting oldest session");
            self.entries.remove(&oldest);
        }
    }
}

/// Process-local sessions; everything resets on restart. At most
/// `max_sessions` are held, the oldest going first.
pub struct InMemorySessionStore {
    sessions: RwLock<Sessions>,
    forget_user_on_logout: bool,
    max_sessions: usize,
}

impl InMemorySessionStore {
    pub fn new(forget_user_on_logout: bool, max_sessions: usize) -> Self {
        InMemorySessionStore {
            sessions: RwLock::new(Sessions::default()),
            forget_user_on_logout,
            max_sessions,
        }
    }

    /// Number of sessions currently held.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn state(&self, id: &SessionId) -> AuthState {
        self.sessions
            .read()
            .await
            .entries
            .get(id)
            .map(|entry| entry.store.state())
            .unwrap_or_default()
    }

    async fn login(&self, previous: Option<&SessionId>, user: UserRecord) -> SessionId {
        let mut sessions = self.sessions.write().await;
        if let Some(previous) = previous {
            sessions.entries.remove(previous);
        }
        sessions.make_room(self.max_sessions);

        let mut store = AuthStore::new(self.forget_user_on_logout);
        store.login(user);
        let id = SessionId::new();
        let issued = sessions.next_issue;
        sessions.next_issue += 1;
        sessions.entries.insert(id, Entry { store, issued });
        id
    }

    /// With `forget_user_on_logout` nothing is left worth keeping, so the
    /// session is dropped; otherwise only the flag is cleared.
    async fn logout(&self, id: &SessionId) {
        let mut sessions = self.sessions.write().await;
        if self.forget_user_on_logout {
            sessions.entries.remove(id);
        } else if let Some(entry) = sessions.entries.get_mut(id) {
            entry.store.logout();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(forget_user_on_logout: bool) -> InMemorySessionStore {
        InMemorySessionStore::new(forget_user_on_logout, 100)
    }

    #[tokio::test]
    async fn test_unknown_session_reads_initial_state() {
        let store = store(false);
        assert_eq!(store.state(&SessionId::new()).await, AuthState::default());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = store(false);
        let alice = store.login(None, UserRecord::with_username("alice")).await;
        let other = SessionId::new();

        assert!(store.state(&alice).await.is_authenticated);
        assert!(!store.state(&other).await.is_authenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_flag() {
        let store = store(false);
        let id = store.login(None, UserRecord::with_username("alice")).await;
        store.logout(&id).await;
        let state = store.state(&id).await;
        assert!(!state.is_authenticated);
        assert!(state.user.is_some());
    }

    #[tokio::test]
    async fn test_logout_of_unknown_session_is_a_no_op() {
        let store = store(true);
        let id = SessionId::new();
        store.logout(&id).await;
        assert_eq!(store.state(&id).await, AuthState::default());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_login_never_adopts_a_client_id() {
        let store = store(false);
        let planted = SessionId::new();

        let issued = store
            .login(Some(&planted), UserRecord::with_username("victim"))
            .await;

        assert_ne!(issued, planted);
        assert!(!store.state(&planted).await.is_authenticated);
        assert!(store.state(&issued).await.is_authenticated);
    }

    #[tokio::test]
    async fn test_relogin_replaces_previous_session() {
        let store = store(false);
        let first = store.login(None, UserRecord::with_username("alice")).await;
        let second = store
            .login(Some(&first), UserRecord::with_username("bob"))
            .await;

        assert_ne!(first, second);
        assert_eq!(store.state(&first).await, AuthState::default());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_forgetting_logout_drops_the_session() {
        let store = store(true);
        for _ in 0..1_000 {
            let id = store.login(None, UserRecord::with_username("alice")).await;
            store.logout(&id).await;
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_session_count_is_capped() {
        let store = InMemorySessionStore::new(false, 3);
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d", "e"] {
            ids.push(store.login(None, UserRecord::with_username(name)).await);
        }

        assert_eq!(store.len().await, 3);
        assert!(!store.state(&ids[0]).await.is_authenticated);
        assert!(!store.state(&ids[1]).await.is_authenticated);
        for id in &ids[2..] {
            assert!(store.state(id).await.is_authenticated);
        }
    }

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::new();
        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
        assert_eq!(SessionId::parse("not-a-session"), None);
    }
}
