//! Shared helpers for handler tests.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::{test::TestRequest, web};

use crate::domain::ports::{FixtureForecastService, ForecastService};
use crate::domain::session::{AUTH_COOKIE, AUTH_MARKER, PlainFlagSessions, Role, ROLE_COOKIE};
use crate::domain::store::DataStore;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::MemoryCollectionStore;

/// Fresh state over an empty in-memory backing and the canned forecast.
pub fn state() -> web::Data<HttpState> {
    state_with_forecast(Arc::new(FixtureForecastService))
}

/// Fresh state with a caller-chosen forecast implementation.
pub fn state_with_forecast(forecast: Arc<dyn ForecastService>) -> web::Data<HttpState> {
    let store = Arc::new(DataStore::open(Arc::new(MemoryCollectionStore::default())));
    let sessions = Arc::new(PlainFlagSessions::new(store.clone()));
    web::Data::new(HttpState::new(store, sessions, forecast, false))
}

/// Attach valid session cookies for `role` to a test request.
pub fn authed(req: TestRequest, role: Role) -> TestRequest {
    req.cookie(Cookie::new(AUTH_COOKIE, AUTH_MARKER))
        .cookie(Cookie::new(ROLE_COOKIE, role.as_str()))
}
