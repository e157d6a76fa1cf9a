//! Login, signup and logout handlers.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, info, warn};

use crate::guard::ENTRY_PATH;
use crate::metrics::MetricsRecorder;
use crate::models::{LoginForm, SignupForm, UserRecord};
use crate::session::{CurrentSession, session_cookie};
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use crate::validation::{ValidationErrors, login_schema, signup_schema};

/// Where a successful login or signup lands.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Registers the login, signup and logout routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(ENTRY_PATH, get(login_page).post(login))
        .route("/signup", get(signup_page).post(signup))
        .route("/logout", post(logout))
}

async fn login_page(State(state): State<AppState>) -> Result<Html<String>, HTTPError> {
    Ok(state.views.login("", &ValidationErrors::default())?)
}

/// Validates the login form. Invalid submissions are re-rendered with
/// their errors and never reach the session store; valid ones are accepted
/// without any credential check.
async fn login(
    State(state): State<AppState>,
    session: CurrentSession,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, HTTPError> {
    let errors = login_schema().validate(&form);
    if !errors.is_valid() {
        warn!(
            event_name = "session.login.invalid",
            event_domain = "session",
            fields = errors.len(),
            "Login form failed validation"
        );
        state.metrics.record_validation_failure("login");
        state.metrics.record_login_attempt("invalid");
        let page = state.views.login(&form.username, &errors)?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    info!(
        event_name = "session.login.success",
        event_domain = "session",
        username = form.username.as_str(),
        "User logged in"
    );
    let id = state
        .sessions
        .login(session.id.as_ref(), UserRecord::with_username(form.username))
        .await;
    state.metrics.record_login_attempt("success");

    let jar = jar.add(session_cookie(&state.config.session, id));
    Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
}

async fn signup_page(State(state): State<AppState>) -> Result<Html<String>, HTTPError> {
    Ok(state.views.signup("", "", &ValidationErrors::default())?)
}

/// Validates the signup form. A valid signup logs the new identity in and
/// goes to the dashboard.
async fn signup(
    State(state): State<AppState>,
    session: CurrentSession,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> Result<Response, HTTPError> {
    let errors = signup_schema().validate(&form);
    if !errors.is_valid() {
        warn!(
            event_name = "session.signup.invalid",
            event_domain = "session",
            fields = errors.len(),
            "Signup form failed validation"
        );
        state.metrics.record_validation_failure("signup");
        let page = state.views.signup(&form.username, &form.email, &errors)?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    info!(
        event_name = "session.signup.success",
        event_domain = "session",
        "User signed up"
    );
    debug!("Signup values: {:?}", form);
    let user = UserRecord::new(Some(form.username), Some(form.email), None);
    let id = state.sessions.login(session.id.as_ref(), user).await;

    let jar = jar.add(session_cookie(&state.config.session, id));
    Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
}

async fn logout(State(state): State<AppState>, session: CurrentSession) -> Redirect {
    if let Some(id) = session.id {
        state.sessions.logout(&id).await;
        info!(
            event_name = "session.logout",
            event_domain = "session",
            "User logged out"
        );
    }
    Redirect::to(ENTRY_PATH)
}
