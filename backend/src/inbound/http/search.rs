//! Cross-collection search.
//!
//! Case-insensitive substring match over the client roster and the ledger.
//! Ledger amounts in the response are converted to the display currency.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};

use crate::domain::ApiResult;
use crate::domain::records::{Client, FinancialRecord};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Matches across clients and financial records.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query that was evaluated.
    pub query: String,
    /// Clients whose name, company or email matched.
    pub clients: Vec<Client>,
    /// Records whose description or category matched, in the display currency.
    pub records: Vec<FinancialRecord>,
}

fn client_matches(client: &Client, needle: &str) -> bool {
    client.name.to_lowercase().contains(needle)
        || client.company.to_lowercase().contains(needle)
        || client.email.to_lowercase().contains(needle)
}

fn record_matches(record: &FinancialRecord, needle: &str) -> bool {
    record.description.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
}

/// Search clients and records. A blank query matches nothing.
#[utoipa::path(
    get,
    path = "/dashboard/search",
    params(("q" = String, Query, description = "Substring to search for")),
    responses((status = 200, description = "Search results", body = SearchResponse)),
    tags = ["search"],
    operation_id = "search"
)]
#[get("/search")]
pub async fn search(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner().q;
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(HttpResponse::Ok().json(SearchResponse {
            query,
            clients: Vec::new(),
            records: Vec::new(),
        }));
    }
    let clients = state
        .store
        .clients()
        .into_iter()
        .filter(|client| client_matches(client, &needle))
        .collect();
    let records = state
        .store
        .converted_financial_records()
        .into_iter()
        .filter(|record| record_matches(record, &needle))
        .collect();
    Ok(HttpResponse::Ok().json(SearchResponse {
        query,
        clients,
        records,
    }))
}
