//! Server-rendered pages. Presentation only; every decision shown here is
//! made by the session, guard, validation and catalog modules.

use axum::response::Html;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::models::UserRecord;
use crate::pokeapi::CatalogSnapshot;
use crate::validation::ValidationErrors;

const GUEST_NAME: &str = "Guest";
const GUEST_INITIAL: &str = "G";

#[derive(Serialize)]
struct Panel {
    title: &'static str,
    body: &'static str,
}

const DASHBOARD_PANELS: [Panel; 3] = [
    Panel {
        title: "Overview",
        body: "Quick summary of key metrics and data.",
    },
    Panel {
        title: "Reports",
        body: "Generate reports based on user activity.",
    },
    Panel {
        title: "Analytics",
        body: "View detailed analytics and insights.",
    },
];

/// Compiled page templates.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("templates/base.html"))?;
        env.add_template("macros.html", include_str!("templates/macros.html"))?;
        env.add_template("login.html", include_str!("templates/login.html"))?;
        env.add_template("signup.html", include_str!("templates/signup.html"))?;
        env.add_template("dashboard.html", include_str!("templates/dashboard.html"))?;
        env.add_template("pokemon.html", include_str!("templates/pokemon.html"))?;
        Ok(Views { env })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<Html<String>, minijinja::Error> {
        self.env.get_template(name)?.render(ctx).map(Html)
    }

    /// Login form, with the previous username and any field errors.
    pub fn login(
        &self,
        username: &str,
        errors: &ValidationErrors,
    ) -> Result<Html<String>, minijinja::Error> {
        self.render("login.html", context! { username, errors })
    }

    /// Signup form. Passwords are never echoed back.
    pub fn signup(
        &self,
        username: &str,
        email: &str,
        errors: &ValidationErrors,
    ) -> Result<Html<String>, minijinja::Error> {
        self.render("signup.html", context! { username, email, errors })
    }

    pub fn dashboard(&self, user: Option<&UserRecord>) -> Result<Html<String>, minijinja::Error> {
        let display_name = user.and_then(UserRecord::display_name).unwrap_or(GUEST_NAME);
        let initial = user
            .and_then(UserRecord::initial)
            .unwrap_or_else(|| GUEST_INITIAL.to_string());
        self.render(
            "dashboard.html",
            context! { display_name, initial, panels => DASHBOARD_PANELS },
        )
    }

    pub fn pokemon(
        &self,
        search: &str,
        snapshot: &CatalogSnapshot,
    ) -> Result<Html<String>, minijinja::Error> {
        self.render(
            "pokemon.html",
            context! { search, pokemon => &snapshot.pokemon, error => &snapshot.error },
        )
    }
}
