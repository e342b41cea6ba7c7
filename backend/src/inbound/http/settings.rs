//! Workspace settings endpoints.
//!
//! Settings cover every role's profile overrides. Route-level protection is
//! the gate's job (only Admin reaches `/dashboard/settings`); the handlers
//! enforce it again so the endpoints stay safe if mounted elsewhere.

use std::collections::HashMap;

use actix_web::{HttpResponse, get, put, web};

use crate::domain::records::Profile;
use crate::domain::session::Role;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::session::CurrentSession;
use crate::inbound::http::state::HttpState;

fn require_admin(session: &CurrentSession) -> ApiResult<()> {
    let session = session.require_authenticated()?;
    if session.role == Role::Admin {
        Ok(())
    } else {
        Err(Error::forbidden("settings are restricted to the Admin role"))
    }
}

/// Every role's profile overrides, keyed by role name.
#[utoipa::path(
    get,
    path = "/dashboard/settings",
    responses(
        (status = 200, description = "All profiles", body = HashMap<String, Profile>),
        (status = 403, description = "Not an Admin", body = Error)
    ),
    tags = ["settings"],
    operation_id = "listSettings"
)]
#[get("/settings")]
pub async fn list(
    state: web::Data<HttpState>,
    session: CurrentSession,
) -> ApiResult<HttpResponse> {
    require_admin(&session)?;
    let profiles: HashMap<&'static str, Profile> = state
        .store
        .profiles()
        .into_iter()
        .map(|(role, profile)| (role.as_str(), profile))
        .collect();
    Ok(HttpResponse::Ok().json(profiles))
}

/// Replace a role's profile overrides.
#[utoipa::path(
    put,
    path = "/dashboard/settings/{role}",
    request_body = Profile,
    params(("role" = String, Path, description = "Role name, e.g. Manager")),
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Unknown role", body = Error),
        (status = 403, description = "Not an Admin", body = Error)
    ),
    tags = ["settings"],
    operation_id = "updateRoleProfile"
)]
#[put("/settings/{role}")]
pub async fn update(
    state: web::Data<HttpState>,
    session: CurrentSession,
    role: web::Path<String>,
    payload: web::Json<Profile>,
) -> ApiResult<HttpResponse> {
    require_admin(&session)?;
    let role = role.into_inner();
    let Some(role) = Role::parse(&role) else {
        return Err(Error::invalid_request(format!("unknown role {role}")));
    };
    let profile = payload.into_inner();
    state
        .store
        .set_profile(role, profile.clone())
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Ok().json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
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
            .service(web::scope("/dashboard").service(list).service(update))
    }

    #[rstest]
    #[case(Role::Manager)]
    #[case(Role::Accountant)]
    #[actix_web::test]
    async fn non_admins_are_forbidden(#[case] role: Role) {
        let app = test::init_service(app()).await;
        let res = test::call_service(
            &app,
            test_utils::authed(test::TestRequest::get().uri("/dashboard/settings"), role)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admins_can_rename_another_role() {
        let app = test::init_service(app()).await;

        let res = test::call_service(
            &app,
            test_utils::authed(
                test::TestRequest::put().uri("/dashboard/settings/Accountant"),
                Role::Admin,
            )
            .set_json(json!({ "displayName": "Jordan Blake" }))
            .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(
            test::call_service(
                &app,
                test_utils::authed(
                    test::TestRequest::get().uri("/dashboard/settings"),
                    Role::Admin,
                )
                .to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(body["Accountant"]["displayName"], "Jordan Blake");
    }

    #[actix_web::test]
    async fn unknown_roles_are_rejected() {
        let app = test::init_service(app()).await;
        let res = test::call_service(
            &app,
            test_utils::authed(
                test::TestRequest::put().uri("/dashboard/settings/Superuser"),
                Role::Admin,
            )
            .set_json(json!({ "displayName": "x" }))
            .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
