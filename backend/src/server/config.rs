//! Server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use url::Url;

/// Builder-style configuration for the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_dir: Option<PathBuf>,
    pub(crate) forecast_url: Option<Url>,
    pub(crate) cookie_secure: bool,
}

impl ServerConfig {
    /// Configuration with in-memory storage and the canned forecast.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cookie_secure: bool) -> Self {
        Self {
            bind_addr,
            data_dir: None,
            forecast_url: None,
            cookie_secure,
        }
    }

    /// Persist collections as JSON files under `data_dir`.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = Some(data_dir);
        self
    }

    /// Delegate forecasting to a remote endpoint.
    #[must_use]
    pub fn with_forecast_url(mut self, forecast_url: Url) -> Self {
        self.forecast_url = Some(forecast_url);
        self
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
