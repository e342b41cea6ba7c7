//! Forecast collaborator adapters.

mod http_client;

pub use http_client::HttpForecastService;
