//! HTTP inbound adapter exposing the dashboard endpoints.

pub mod auth;
pub mod calendar;
pub mod clients;
pub mod error;
pub mod financials;
pub mod forecasting;
pub mod health;
pub mod notifications;
pub mod overview;
pub mod profile;
pub mod search;
pub mod session;
pub mod settings;
pub mod state;
pub mod support;
#[cfg(test)]
pub mod test_utils;

pub use crate::domain::ApiResult;
