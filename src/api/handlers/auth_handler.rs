//! Authentication handlers - registration, login and logout pages.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::PrivateCookieJar;
use serde::Deserialize;

use crate::api::session;
use crate::api::views::AuthPage;
use crate::api::AppState;
use crate::domain::{NewUser, Role};
use crate::errors::{AppError, AppResult};

/// Inline error shown when a login attempt fails.
const INVALID_LOGIN: &str = "Invalid email or password!";
/// Inline error shown when the chosen email is already taken.
const DUPLICATE_EMAIL: &str = "Email already registered!";

/// Registration form fields
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Login form fields
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(show_register).post(register))
        .route("/login", get(show_login).post(login))
        .route("/logout", get(logout))
}

/// Show the registration form
async fn show_register(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render("register", &AuthPage { error: None })
}

/// Create the account, or re-render the form when the email is taken
async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    let role: Role = form.role.parse()?;
    let new_user = NewUser {
        name: form.name,
        email: form.email,
        role,
        field: blank_to_none(form.field),
        company: blank_to_none(form.company),
        bio: blank_to_none(form.bio),
    };

    match state.auth_service.register(new_user, &form.password).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(AppError::DuplicateEmail) => {
            let page = AuthPage {
                error: Some(DUPLICATE_EMAIL.to_string()),
            };
            Ok(state.views.render("register", &page)?.into_response())
        }
        Err(err) => Err(err),
    }
}

/// Show the login form
async fn show_login(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render("login", &AuthPage { error: None })
}

/// Verify credentials and establish the session cookie
async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match state
        .auth_service
        .authenticate(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            let jar = session::establish(jar, &user)?;
            Ok((jar, Redirect::to("/dashboard")).into_response())
        }
        Err(AppError::InvalidCredentials) => {
            let page = AuthPage {
                error: Some(INVALID_LOGIN.to_string()),
            };
            Ok(state.views.render("login", &page)?.into_response())
        }
        Err(err) => Err(err),
    }
}

/// Clear the session and return to the landing page
async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    (session::clear(jar), Redirect::to("/"))
}

/// Optional profile inputs arrive as empty strings when left blank.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
