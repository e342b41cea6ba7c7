//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of stringly results.

use async_trait::async_trait;
use thiserror::Error as ThisError;

/// Errors surfaced by a [`CollectionStore`] adapter.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("collection storage I/O failed: {message}")]
    Io {
        /// Adapter-provided description of the failure.
        message: String,
    },
}

impl StorageError {
    /// Helper for I/O level failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Key-value persistence port for collection blobs.
///
/// Keys are short collection names; values are whole JSON documents. Writes
/// replace the entire blob — the store never issues delta writes.
pub trait CollectionStore: Send + Sync {
    /// Read the blob for `key`, `None` when it has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob for `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Errors surfaced by a [`ForecastService`] adapter.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ForecastError {
    /// The collaborator was unreachable or returned an unusable response.
    #[error("forecast service unavailable: {message}")]
    Unavailable {
        /// Adapter-provided description of the failure.
        message: String,
    },
}

impl ForecastError {
    /// Helper for unavailability failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Generative forecast collaborator: freeform financial data in, freeform
/// forecast text out. Treated as opaque; no retry policy beyond surfacing a
/// generic failure to the caller.
#[async_trait]
pub trait ForecastService: Send + Sync {
    /// Produce a forecast narrative from the supplied financial data.
    async fn forecast(&self, financial_data: &str) -> Result<String, ForecastError>;
}

/// Canned forecast implementation for tests and offline runs.
pub struct FixtureForecastService;

#[async_trait]
impl ForecastService for FixtureForecastService {
    async fn forecast(&self, _financial_data: &str) -> Result<String, ForecastError> {
        Ok(
            "Projected revenue grows modestly next year while expenses stay flat; \
             profit improves accordingly."
                .to_owned(),
        )
    }
}

/// Forecast implementation that always fails; used to exercise the error
/// path in handler tests.
pub struct UnavailableForecastService;

#[async_trait]
impl ForecastService for UnavailableForecastService {
    async fn forecast(&self, _financial_data: &str) -> Result<String, ForecastError> {
        Err(ForecastError::unavailable("fixture outage"))
    }
}
