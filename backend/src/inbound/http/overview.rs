//! Dashboard home view.
//!
//! ```text
//! GET /dashboard
//! ```

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use serde::Serialize;

use crate::domain::finance::{MonthOverMonth, month_over_month};
use crate::domain::records::FinancialRecord;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::session::CurrentSession;
use crate::inbound::http::state::HttpState;

const RECENT_TRANSACTIONS: usize = 5;

/// View model for the dashboard home page.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    /// Display name for the greeting line.
    pub greeting_name: String,
    /// Current month figures against the previous month, in the display
    /// currency.
    pub summary: MonthOverMonth,
    /// Latest transactions, newest first, in the display currency.
    pub recent_transactions: Vec<FinancialRecord>,
}

/// Business overview for the current month.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Overview", body = OverviewResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "overview"
)]
#[get("")]
pub async fn overview(
    state: web::Data<HttpState>,
    session: CurrentSession,
) -> ApiResult<HttpResponse> {
    let session = session.require_authenticated()?;
    let records = state.store.converted_financial_records();
    let clients = state.store.clients();
    let summary = month_over_month(&records, &clients, Utc::now().date_naive());

    let mut recent = records;
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_TRANSACTIONS);

    Ok(HttpResponse::Ok().json(OverviewResponse {
        greeting_name: session.display_name.clone(),
        summary,
        recent_transactions: recent,
    }))
}
