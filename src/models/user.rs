use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The identity handed to `AuthStore::login`.
///
/// The store treats it as an opaque bag: nothing here is validated or
/// normalized. `username` and `email` are the fields the views know about;
/// anything else rides along in `attributes`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl UserRecord {
    /// Construct a new UserRecord with optional email and attributes.
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        attributes: Option<HashMap<String, String>>,
    ) -> Self {
        UserRecord {
            username,
            email,
            attributes: attributes.unwrap_or_default(),
        }
    }

    /// Shorthand for the record the login form produces.
    pub fn with_username(username: impl Into<String>) -> Self {
        Self::new(Some(username.into()), None, None)
    }

    /// The name shown in the dashboard greeting: username, then email.
    /// Empty strings count as absent.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.username).or_else(|| non_empty(&self.email))
    }

    /// Upper-cased first letter of the display name, for the avatar badge.
    pub fn initial(&self) -> Option<String> {
        self.display_name()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
