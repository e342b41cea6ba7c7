//! Financial forecasting endpoint.
//!
//! Delegates to the [`ForecastService`] port. Collaborator failures are
//! collapsed into one generic message so nothing about the upstream leaks
//! to the caller.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// Shortest financial-data string worth forecasting from.
pub const MIN_FINANCIAL_DATA_LEN: usize = 50;

const FORECAST_FAILED: &str = "An unexpected error occurred. Please try again later.";

/// Forecast request: freeform financial data to extrapolate from.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Financial figures and context, at least 50 characters.
    pub financial_data: String,
}

/// Forecast narrative.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    /// Generated forecast text.
    pub forecast: String,
}

/// Generate a forecast from freeform financial data.
#[utoipa::path(
    post,
    path = "/dashboard/forecasting",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast generated", body = ForecastResponse),
        (status = 400, description = "Input too short", body = Error),
        (status = 503, description = "Forecast collaborator unavailable", body = Error)
    ),
    tags = ["forecasting"],
    operation_id = "generateForecast"
)]
#[post("/forecasting")]
pub async fn generate(
    state: web::Data<HttpState>,
    payload: web::Json<ForecastRequest>,
) -> ApiResult<HttpResponse> {
    let financial_data = payload.into_inner().financial_data;
    let trimmed = financial_data.trim();
    if trimmed.chars().count() < MIN_FINANCIAL_DATA_LEN {
        return Err(Error::invalid_request(
            "please provide more detailed financial data for an accurate forecast",
        )
        .with_details(serde_json::json!({
            "field": "financialData",
            "minLength": MIN_FINANCIAL_DATA_LEN,
        })));
    }
    let forecast = state.forecast.forecast(trimmed).await.map_err(|err| {
        warn!(error = %err, "forecast collaborator failed");
        Error::service_unavailable(FORECAST_FAILED)
    })?;
    Ok(HttpResponse::Ok().json(ForecastResponse { forecast }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UnavailableForecastService;
    use crate::inbound::http::test_utils;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web::Data};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn post(state: Data<crate::inbound::http::state::HttpState>, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/dashboard").service(generate)),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dashboard/forecasting")
                .set_json(body)
                .to_request(),
        )
        .await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn short_input_is_rejected_with_field_details() {
        let (status, body) =
            post(test_utils::state(), json!({ "financialData": "too short" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "financialData");
        assert_eq!(body["details"]["minLength"], 50);
    }

    #[actix_web::test]
    async fn long_enough_input_yields_a_forecast() {
        let data = "Revenue 12000, expenses 2425.50, profit 9574.50 for June 2024 across four active clients.";
        let (status, body) = post(test_utils::state(), json!({ "financialData": data })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["forecast"].as_str().expect("forecast").contains("revenue"));
    }

    #[actix_web::test]
    async fn collaborator_failure_surfaces_one_generic_message() {
        let state = test_utils::state_with_forecast(Arc::new(UnavailableForecastService));
        let data = "Revenue 12000, expenses 2425.50, profit 9574.50 for June 2024 across four active clients.";
        let (status, body) = post(state, json!({ "financialData": data })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "service_unavailable");
        assert_eq!(
            body["message"],
            "An unexpected error occurred. Please try again later."
        );
        assert!(body["message"].as_str().expect("message").find("outage").is_none());
    }
}
