//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the domain store and the ports, never on concrete adapters.

use std::sync::Arc;

use crate::domain::ports::ForecastService;
use crate::domain::session::SessionProvider;
use crate::domain::store::DataStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The business data store, the single explicit data context.
    pub store: Arc<DataStore>,
    /// Session resolution seam.
    pub sessions: Arc<dyn SessionProvider>,
    /// Generative forecast collaborator.
    pub forecast: Arc<dyn ForecastService>,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
}

impl HttpState {
    /// Bundle the dependencies for the handlers.
    pub fn new(
        store: Arc<DataStore>,
        sessions: Arc<dyn SessionProvider>,
        forecast: Arc<dyn ForecastService>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            store,
            sessions,
            forecast,
            cookie_secure,
        }
    }
}
