//! Notification feed endpoints.
//!
//! The feed is newest first and capped; pushing onto a full feed silently
//! drops the oldest entry.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::records::Notification;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// A notification to append to the feed.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    /// Short headline.
    pub title: String,
    /// Supporting detail.
    pub description: String,
}

/// The feed, newest first.
#[utoipa::path(
    get,
    path = "/dashboard/notifications",
    responses((status = 200, description = "Notification feed", body = Vec<Notification>)),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.store.notifications()))
}

/// Push a notification onto the feed.
#[utoipa::path(
    post,
    path = "/dashboard/notifications",
    request_body = NewNotification,
    responses(
        (status = 201, description = "Notification added", body = Notification),
        (status = 500, description = "Persistence failed", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "createNotification"
)]
#[post("/notifications")]
pub async fn create(
    state: web::Data<HttpState>,
    payload: web::Json<NewNotification>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let notification = state
        .store
        .add_notification(payload.title, payload.description)
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Created().json(notification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn pushed_notifications_appear_first() {
        let app = test::init_service(
            App::new()
                .app_data(test_utils::state())
                .service(web::scope("/dashboard").service(list).service(create)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dashboard/notifications")
                .set_json(json!({
                    "title": "Invoice Paid",
                    "description": "Innovate Inc. settled invoice #1042."
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let feed: Vec<Notification> = test::read_body_json(
            test::call_service(
                &app,
                test::TestRequest::get()
                    .uri("/dashboard/notifications")
                    .to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(feed[0].title, "Invoice Paid");
    }
}
