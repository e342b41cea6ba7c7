//! Appointment calendar endpoints.

use actix_web::{HttpResponse, get, put, web};

use crate::domain::records::Appointment;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// All appointments.
#[utoipa::path(
    get,
    path = "/dashboard/calendar",
    responses((status = 200, description = "Appointments", body = Vec<Appointment>)),
    tags = ["calendar"],
    operation_id = "listAppointments"
)]
#[get("/calendar")]
pub async fn list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.store.appointments()))
}

/// Replace the full appointment list.
#[utoipa::path(
    put,
    path = "/dashboard/calendar",
    request_body = Vec<Appointment>,
    responses(
        (status = 204, description = "Appointments replaced"),
        (status = 500, description = "Persistence failed", body = Error)
    ),
    tags = ["calendar"],
    operation_id = "replaceAppointments"
)]
#[put("/calendar")]
pub async fn replace(
    state: web::Data<HttpState>,
    payload: web::Json<Vec<Appointment>>,
) -> ApiResult<HttpResponse> {
    state
        .store
        .set_appointments(payload.into_inner())
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;
    use crate::inbound::http::test_utils;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn appointments_round_trip() {
        let app = test::init_service(
            App::new()
                .app_data(test_utils::state())
                .service(web::scope("/dashboard").service(list).service(replace)),
        )
        .await;

        let mut appointments = seed::appointments();
        if let Some(first) = appointments.first_mut() {
            first.client_id = Some("1".into());
            first.client_name = Some("Alice Johnson".into());
        }

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/dashboard/calendar")
                .set_json(&appointments)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let listed: Vec<Appointment> = test::read_body_json(
            test::call_service(
                &app,
                test::TestRequest::get().uri("/dashboard/calendar").to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(listed, appointments);
    }
}
