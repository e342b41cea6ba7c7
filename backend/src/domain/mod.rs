//! Domain primitives and services.
//!
//! Purpose: define the transport-agnostic core of the dashboard — session
//! resolution, the route access table, business records, the persisted data
//! store, and financial aggregation. Inbound adapters map these onto HTTP;
//! outbound adapters supply persistence and the forecast collaborator
//! through the ports in [`ports`].

pub mod access;
pub mod error;
pub mod finance;
pub mod ports;
pub mod records;
pub mod seed;
pub mod session;
pub mod store;

pub use self::access::{fallback_route, is_allowed};
pub use self::error::{Error, ErrorCode};
pub use self::finance::{Currency, MonthOverMonth, PeriodSummary, percent_change, summarize};
pub use self::records::{
    Appointment, Client, ClientStatus, FinancialRecord, Notification, Profile, RecordKind,
};
pub use self::session::{PlainFlagSessions, Role, Session, SessionFlags, SessionProvider};
pub use self::store::{DataStore, StoreEvent};

/// Convenient result alias for fallible domain and handler code.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bizview_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
