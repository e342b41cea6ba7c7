//! Session extraction for handlers.
//!
//! The gate already filters requests by role, but handlers still derive the
//! session themselves for render-time decisions (greeting names, profile
//! ownership) and as a second line of defence. Resolution is a pure read of
//! the request cookies through the configured [`crate::domain::SessionProvider`];
//! a stateless HTTP service re-resolves on every request by construction,
//! which is what keeps concurrent tabs consistent without polling.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};

use crate::domain::session::{AUTH_COOKIE, ROLE_COOKIE, Session, SessionFlags};
use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// Extractor resolving the request's session from its cookie flags.
#[derive(Debug, Clone)]
pub struct CurrentSession(Session);

impl CurrentSession {
    /// The resolved session. Guest when the flags are missing or malformed.
    pub fn session(&self) -> &Session {
        &self.0
    }

    /// The session, or `401 Unauthorized` when it is the guest session.
    pub fn require_authenticated(&self) -> ApiResult<&Session> {
        if self.0.authenticated {
            Ok(&self.0)
        } else {
            Err(Error::unauthorized("login required"))
        }
    }
}

impl FromRequest for CurrentSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<HttpState>>() else {
            return ready(Err(Error::internal("session state is not configured")));
        };
        let flags = SessionFlags {
            auth_token: req.cookie(AUTH_COOKIE).map(|c| c.value().to_owned()),
            user_role: req.cookie(ROLE_COOKIE).map(|c| c.value().to_owned()),
        };
        ready(Ok(Self(state.sessions.resolve(&flags))))
    }
}
