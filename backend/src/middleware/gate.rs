//! The request gate.
//!
//! Runs before every matched route. Each request is a one-shot, stateless
//! evaluation: resolve the session from the cookie flags, consult the route
//! access table, then redirect or forward. Every dashboard response —
//! redirect or forward — carries cache-suppression headers so that back
//! navigation after logout cannot resurrect a protected page from the
//! browser cache. That is a correctness requirement, not an optimisation.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::HttpResponse;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::access::{DASHBOARD_PREFIX, LOGIN_PREFIX, fallback_route, is_allowed};
use crate::domain::session::{AUTH_COOKIE, ROLE_COOKIE, SessionFlags, SessionProvider};

/// `Cache-Control` value stamped on every dashboard response.
pub const CACHE_SUPPRESSION: &str = "private, no-cache, no-store, must-revalidate";

fn suppress_caching(headers: &mut HeaderMap) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_SUPPRESSION),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
}

fn flags_from_request(req: &ServiceRequest) -> SessionFlags {
    SessionFlags {
        auth_token: req.cookie(AUTH_COOKIE).map(|c| c.value().to_owned()),
        user_role: req.cookie(ROLE_COOKIE).map(|c| c.value().to_owned()),
    }
}

/// Middleware gating dashboard routes by session and role.
pub struct AccessGate {
    sessions: Arc<dyn SessionProvider>,
}

impl AccessGate {
    /// Build a gate resolving sessions through `sessions`.
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service,
            sessions: self.sessions.clone(),
        }))
    }
}

/// Service wrapper produced by [`AccessGate`].
pub struct AccessGateMiddleware<S> {
    service: S,
    sessions: Arc<dyn SessionProvider>,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = self.sessions.resolve(&flags_from_request(&req));
        let path = req.path().to_owned();
        let on_login = path.starts_with(LOGIN_PREFIX);
        let on_dashboard = path.starts_with(DASHBOARD_PREFIX);

        let redirect_to = if on_dashboard && !session.authenticated {
            Some(LOGIN_PREFIX)
        } else if on_login && session.authenticated {
            Some(DASHBOARD_PREFIX)
        } else if on_dashboard && !is_allowed(session.role, &path) {
            Some(fallback_route(session.role))
        } else {
            None
        };

        if let Some(target) = redirect_to {
            debug!(%path, role = %session.role, target, "request gate redirect");
            let redirect = HttpResponse::Found()
                .insert_header((header::LOCATION, target))
                .finish();
            let mut res = req.into_response(redirect).map_into_right_body();
            if on_dashboard {
                suppress_caching(res.headers_mut());
            }
            return Box::pin(ready(Ok(res)));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?.map_into_left_body();
            if on_dashboard {
                suppress_caching(res.headers_mut());
            }
            Ok(res)
        })
    }
}
