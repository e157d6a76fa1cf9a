use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Session cookie settings and logout behaviour.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the session cookie `Secure` (only sent over HTTPS).
    #[serde(default)]
    pub secure_cookie: bool,
    /// Drop the stored user record on logout instead of only clearing the flag.
    #[serde(default)]
    pub forget_user_on_logout: bool,
    /// Upper bound on sessions held in memory; the oldest are evicted first.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
            forget_user_on_logout: false,
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_cookie_name() -> String {
    "dexboard_session".to_string()
}

fn default_max_sessions() -> usize {
    10_000
}
