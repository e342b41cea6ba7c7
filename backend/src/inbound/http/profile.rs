//! Profile endpoints for the signed-in role.

use actix_web::{HttpResponse, get, put, web};
use serde::Serialize;

use crate::domain::records::Profile;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::session::CurrentSession;
use crate::inbound::http::state::HttpState;

/// The signed-in role's profile plus the name it resolves to.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Role the profile belongs to.
    pub role: String,
    /// Effective display name after overrides.
    pub display_name: String,
    /// Stored overrides.
    pub profile: Profile,
}

/// The signed-in role's profile.
#[utoipa::path(
    get,
    path = "/dashboard/profile",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 401, description = "Not signed in", body = Error)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn view(
    state: web::Data<HttpState>,
    session: CurrentSession,
) -> ApiResult<HttpResponse> {
    let session = session.require_authenticated()?;
    Ok(HttpResponse::Ok().json(ProfileResponse {
        role: session.role.as_str().to_owned(),
        display_name: session.display_name.clone(),
        profile: state.store.profile(session.role),
    }))
}

/// Replace the signed-in role's profile overrides.
#[utoipa::path(
    put,
    path = "/dashboard/profile",
    request_body = Profile,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 401, description = "Not signed in", body = Error)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[put("/profile")]
pub async fn update(
    state: web::Data<HttpState>,
    session: CurrentSession,
    payload: web::Json<Profile>,
) -> ApiResult<HttpResponse> {
    let session = session.require_authenticated()?;
    let profile = payload.into_inner();
    state
        .store
        .set_profile(session.role, profile.clone())
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Ok().json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Role;
    use crate::inbound::http::test_utils;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    fn app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(test_utils::state())
            .service(web::scope("/dashboard").service(view).service(update))
    }

    #[actix_web::test]
    async fn guests_cannot_read_a_profile() {
        let app = test::init_service(app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/dashboard/profile").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn overriding_the_display_name_changes_the_resolved_session() {
        let app = test::init_service(app()).await;

        let res = test::call_service(
            &app,
            test_utils::authed(
                test::TestRequest::put().uri("/dashboard/profile"),
                Role::Manager,
            )
            .set_json(json!({ "displayName": "Morgan Reyes" }))
            .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(
            test::call_service(
                &app,
                test_utils::authed(
                    test::TestRequest::get().uri("/dashboard/profile"),
                    Role::Manager,
                )
                .to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(body["displayName"], "Morgan Reyes");
        assert_eq!(body["role"], "Manager");
    }
}
