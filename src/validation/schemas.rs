use super::rules::{Rule, Schema};

/// Rules for the login form.
pub fn login_schema() -> Schema {
    Schema::new()
        .field(
            "username",
            [
                (Rule::Required, "Username is required"),
                (Rule::MinLength(3), "Invalid Username"),
            ],
        )
        .field(
            "password",
            [
                (Rule::Required, "Password is required"),
                (Rule::MinLength(6), "Invalid Password"),
            ],
        )
}

/// Rules for the signup form. `confirmPassword` is checked against `password`.
pub fn signup_schema() -> Schema {
    Schema::new()
        .field(
            "username",
            [
                (Rule::Required, "Username is required"),
                (Rule::MinLength(3), "Username must be at least 3 characters"),
            ],
        )
        .field(
            "email",
            [
                (Rule::Required, "Email is required"),
                (Rule::Email, "Invalid email address"),
            ],
        )
        .field(
            "password",
            [
                (Rule::Required, "Password is required"),
                (Rule::MinLength(6), "Password must be at least 6 characters"),
            ],
        )
        .field(
            "confirmPassword",
            [
                (Rule::Required, "Password confirmation is required"),
                (Rule::Matches("password"), "Passwords must match"),
            ],
        )
}
