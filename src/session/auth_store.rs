use serde::Serialize;
use tracing::debug;

use crate::models::UserRecord;

/// Snapshot of one session's authentication.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<UserRecord>,
}

/// The mock auth store. `login` accepts anything; there is no credential
/// check and no failure path.
///
/// Transitions: `false --login--> true`, `true --logout--> false`.
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
    state: AuthState,
    forget_user_on_logout: bool,
}

impl AuthStore {
    /// A fresh store: not authenticated, no user.
    pub fn new(forget_user_on_logout: bool) -> Self {
        AuthStore {
            state: AuthState::default(),
            forget_user_on_logout,
        }
    }

    pub fn login(&mut self, user: UserRecord) {
        debug!(user = ?user.display_name(), "session login");
        self.state.user = Some(user);
        self.state.is_authenticated = true;
    }

    /// Clears the flag. The user record stays unless the store was built
    /// with `forget_user_on_logout`.
    pub fn logout(&mut self) {
        debug!("session logout");
        self.state.is_authenticated = false;
        if self.forget_user_on_logout {
            self.state.user = None;
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unauthenticated() {
        let store = AuthStore::new(false);
        assert_eq!(store.state(), AuthState::default());
    }

    #[test]
    fn test_login_sets_user_verbatim() {
        let mut store = AuthStore::new(false);
        let user = UserRecord::with_username("alice");
        store.login(user.clone());
        let state = store.state();
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(user));
    }

    #[test]
    fn test_login_accepts_anything() {
        let mut store = AuthStore::new(false);
        store.login(UserRecord::default());
        assert!(store.state().is_authenticated);
    }

    #[test]
    fn test_logout_keeps_user_by_default() {
        let mut store = AuthStore::new(false);
        store.login(UserRecord::with_username("alice"));
        store.logout();
        let state = store.state();
        assert!(!state.is_authenticated);
        assert_eq!(
            state.user.and_then(|u| u.username).as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn test_logout_can_forget_user() {
        let mut store = AuthStore::new(true);
        store.login(UserRecord::with_username("alice"));
        store.logout();
        assert_eq!(store.state(), AuthState::default());
    }

    #[test]
    fn test_login_after_logout_replaces_user() {
        let mut store = AuthStore::new(false);
        store.login(UserRecord::with_username("alice"));
        store.logout();
        store.login(UserRecord::with_username("bob"));
        let state = store.state();
        assert!(state.is_authenticated);
        assert_eq!(state.user.and_then(|u| u.username).as_deref(), Some("bob"));
    }
}
