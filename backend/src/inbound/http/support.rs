//! Support contact endpoint. Static content, no store access.

use actix_web::{HttpResponse, get};
use serde::Serialize;

use crate::domain::ApiResult;

/// How to reach the support desk.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupportContact {
    /// Support mailbox.
    pub email: &'static str,
    /// Support phone line.
    pub phone: &'static str,
    /// Staffed hours description.
    pub hours: &'static str,
}

/// Support contact details.
#[utoipa::path(
    get,
    path = "/dashboard/support",
    responses((status = 200, description = "Support contact", body = SupportContact)),
    tags = ["support"],
    operation_id = "getSupportContact"
)]
#[get("/support")]
pub async fn contact() -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SupportContact {
        email: "support@bizview.example",
        phone: "+1 (555) 010-4477",
        hours: "Monday to Friday, 9am to 5pm Eastern",
    }))
}
