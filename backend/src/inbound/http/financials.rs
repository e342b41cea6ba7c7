//! Financial ledger endpoints.
//!
//! ```text
//! GET /dashboard/financials            records in the display currency
//! PUT /dashboard/financials            replace the ledger (base currency)
//! PUT /dashboard/financials/currency   select the display currency
//! ```
//!
//! Reads are always converted; writes are always base currency. The stored
//! amounts never change when the display currency does.

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::finance::Currency;
use crate::domain::records::FinancialRecord;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// Ledger view in the selected display currency.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsResponse {
    /// Currency the amounts are shown in.
    pub currency: Currency,
    /// Converted ledger entries.
    pub records: Vec<FinancialRecord>,
}

/// Display currency selection body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySelection {
    /// Currency to display amounts in.
    pub currency: Currency,
}

/// The ledger, converted for display.
#[utoipa::path(
    get,
    path = "/dashboard/financials",
    responses((status = 200, description = "Ledger", body = FinancialsResponse)),
    tags = ["financials"],
    operation_id = "listFinancials"
)]
#[get("/financials")]
pub async fn list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(FinancialsResponse {
        currency: state.store.currency(),
        records: state.store.converted_financial_records(),
    }))
}

/// Replace the ledger. Amounts must be supplied in the base currency.
#[utoipa::path(
    put,
    path = "/dashboard/financials",
    request_body = Vec<FinancialRecord>,
    responses(
        (status = 204, description = "Ledger replaced"),
        (status = 500, description = "Persistence failed", body = Error)
    ),
    tags = ["financials"],
    operation_id = "replaceFinancials"
)]
#[put("/financials")]
pub async fn replace(
    state: web::Data<HttpState>,
    payload: web::Json<Vec<FinancialRecord>>,
) -> ApiResult<HttpResponse> {
    state
        .store
        .set_financial_records(payload.into_inner())
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Select the display currency.
#[utoipa::path(
    put,
    path = "/dashboard/financials/currency",
    request_body = CurrencySelection,
    responses(
        (status = 204, description = "Currency selected"),
        (status = 500, description = "Persistence failed", body = Error)
    ),
    tags = ["financials"],
    operation_id = "selectCurrency"
)]
#[put("/financials/currency")]
pub async fn select_currency(
    state: web::Data<HttpState>,
    payload: web::Json<CurrencySelection>,
) -> ApiResult<HttpResponse> {
    state
        .store
        .set_currency(payload.currency)
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::NoContent().finish())
}
