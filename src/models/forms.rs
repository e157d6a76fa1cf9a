use std::fmt;

use serde::Deserialize;

use crate::validation::FormValues;

/// Values posted by the login form.
#[derive(Deserialize, Clone, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Values posted by the signup form.
#[derive(Deserialize, Clone, Default)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: String,
}

impl FormValues for LoginForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "username" => &self.username,
            "password" => &self.password,
            _ => "",
        }
    }
}

impl FormValues for SignupForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "username" => &self.username,
            "email" => &self.email,
            "password" => &self.password,
            "confirmPassword" => &self.confirm_password,
            _ => "",
        }
    }
}

// Passwords never reach the logs.
impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}
