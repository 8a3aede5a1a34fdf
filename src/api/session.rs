//! Session management backed by an encrypted cookie.
//!
//! The session payload is a serialized [`SessionUser`]; the private jar
//! encrypts and authenticates it, so a tampered cookie simply fails to
//! decrypt and reads as "not logged in".

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{SessionUser, User};
use crate::errors::{AppError, AppResult};

/// Store the user's session in the jar after a successful login.
pub fn establish(jar: PrivateCookieJar, user: &User) -> AppResult<PrivateCookieJar> {
    let payload = serde_json::to_string(&SessionUser::from(user))
        .map_err(|err| AppError::internal(format!("Failed to encode session: {}", err)))?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok(jar.add(cookie))
}

/// Drop the session cookie on logout.
pub fn clear(jar: PrivateCookieJar) -> PrivateCookieJar {
    // Removal must carry the same path the cookie was set with.
    jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/").build())
}

fn read(jar: &PrivateCookieJar) -> Option<SessionUser> {
    let cookie = jar.get(SESSION_COOKIE_NAME)?;
    serde_json::from_str(cookie.value()).ok()
}

/// Extractor that requires a logged-in user.
///
/// Handlers take `SessionUser` as an argument; requests without a valid
/// session cookie are redirected to the login page by the rejection.
#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = Key::from_ref(state);
        let jar = PrivateCookieJar::from_headers(&parts.headers, key);
        read(&jar).ok_or(AppError::Unauthenticated)
    }
}
