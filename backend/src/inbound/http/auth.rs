//! Login and logout.
//!
//! ```text
//! POST /login  {"role":"Manager"}
//! POST /logout
//! ```
//!
//! There is no credential verification by design: signing in picks a role
//! and sets the two plain cookie flags the rest of the system derives
//! sessions from. The flags are intentionally readable by the client; a
//! hardening pass would swap in a signed-token
//! [`crate::domain::SessionProvider`] without touching these handlers.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::session::{AUTH_COOKIE, AUTH_MARKER, ROLE_COOKIE, Role, SessionFlags};
use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// Login request body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Role to sign in as. `Guest` is rejected.
    pub role: Role,
}

fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    // Deliberately not HttpOnly: the flags are part of the client-visible
    // contract and render-time conditionals read them directly.
    Cookie::build(name, value)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .finish()
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .max_age(Duration::ZERO)
        .finish()
}

/// Establish a session for the requested role.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = crate::domain::Session),
        (status = 400, description = "Guest or malformed role", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let role = payload.role;
    if role == Role::Guest {
        return Err(Error::invalid_request("cannot sign in as Guest"));
    }
    info!(%role, "session established");
    let session = state.sessions.resolve(&SessionFlags::new(
        Some(AUTH_MARKER),
        Some(role.as_str()),
    ));
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(
            AUTH_COOKIE,
            AUTH_MARKER.to_owned(),
            state.cookie_secure,
        ))
        .cookie(session_cookie(
            ROLE_COOKIE,
            role.as_str().to_owned(),
            state.cookie_secure,
        ))
        .json(session))
}

/// Clear both session flags, resetting the session to Guest.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    info!("session cleared");
    HttpResponse::NoContent()
        .cookie(expired_cookie(AUTH_COOKIE))
        .cookie(expired_cookie(ROLE_COOKIE))
        .finish()
}
