//! Liveness endpoint, outside the gated dashboard scope.

use actix_web::{HttpResponse, get};
use serde::Serialize;

use crate::domain::ApiResult;

/// Liveness payload.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Health {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is live", body = Health)),
    tags = ["health"],
    operation_id = "healthz"
)]
#[get("/healthz")]
pub async fn healthz() -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(Health { status: "ok" }))
}
