//! Client roster endpoints.
//!
//! Creating a client also pushes a "New Client Added" entry onto the
//! notification feed. Deleting a client never cascades into appointments:
//! an appointment keeps its captured `clientName` and a dangling `clientId`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::records::{Client, ClientStatus};
use crate::domain::{ApiResult, Error};
use crate::inbound::http::state::HttpState;

/// Fields supplied when creating a client; the id is assigned server side.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    /// Contact name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Company the client represents.
    pub company: String,
    /// Whether the relationship is active.
    pub status: ClientStatus,
    /// Date of the most recent contact.
    pub last_contact: chrono::NaiveDate,
}

/// All clients.
#[utoipa::path(
    get,
    path = "/dashboard/clients",
    responses((status = 200, description = "Client roster", body = Vec<Client>)),
    tags = ["clients"],
    operation_id = "listClients"
)]
#[get("/clients")]
pub async fn list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.store.clients()))
}

/// Create a client and announce it on the notification feed.
#[utoipa::path(
    post,
    path = "/dashboard/clients",
    request_body = NewClient,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 500, description = "Persistence failed", body = Error)
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create(
    state: web::Data<HttpState>,
    payload: web::Json<NewClient>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let client = Client {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        company: payload.company,
        status: payload.status,
        last_contact: payload.last_contact,
    };
    let mut roster = state.store.clients();
    roster.push(client.clone());
    state
        .store
        .set_clients(roster)
        .map_err(|err| Error::internal(err.to_string()))?;
    state
        .store
        .add_notification(
            "New Client Added",
            format!("{} from {} joined the roster.", client.name, client.company),
        )
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Created().json(client))
}

/// Replace a client's details, keeping its id.
#[utoipa::path(
    put,
    path = "/dashboard/clients/{id}",
    request_body = NewClient,
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 404, description = "No such client", body = Error)
    ),
    tags = ["clients"],
    operation_id = "updateClient"
)]
#[put("/clients/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<NewClient>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let payload = payload.into_inner();
    let mut roster = state.store.clients();
    let Some(slot) = roster.iter_mut().find(|client| client.id == id) else {
        return Err(Error::not_found(format!("no client with id {id}")));
    };
    slot.name = payload.name;
    slot.email = payload.email;
    slot.company = payload.company;
    slot.status = payload.status;
    slot.last_contact = payload.last_contact;
    let updated = slot.clone();
    state
        .store
        .set_clients(roster)
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Remove a client. Appointments referencing it are left untouched.
#[utoipa::path(
    delete,
    path = "/dashboard/clients/{id}",
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client removed"),
        (status = 404, description = "No such client", body = Error)
    ),
    tags = ["clients"],
    operation_id = "deleteClient"
)]
#[delete("/clients/{id}")]
pub async fn remove(state: web::Data<HttpState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let mut roster = state.store.clients();
    let before = roster.len();
    roster.retain(|client| client.id != id);
    if roster.len() == before {
        return Err(Error::not_found(format!("no client with id {id}")));
    }
    state
        .store
        .set_clients(roster)
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
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
        App::new().app_data(test_utils::state()).service(
            web::scope("/dashboard")
                .service(list)
                .service(create)
                .service(update)
                .service(remove),
        )
    }

    fn new_client() -> Value {
        json!({
            "name": "Quinn Harper",
            "email": "quinn@harperco.example",
            "company": "Harper & Co",
            "status": "active",
            "lastContact": "2024-06-20"
        })
    }

    #[actix_web::test]
    async fn creating_a_client_assigns_an_id_and_notifies() {
        let state = test_utils::state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/dashboard").service(create),
            ),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dashboard/clients")
                .set_json(new_client())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Client = test::read_body_json(res).await;
        assert!(Uuid::parse_str(&created.id).is_ok());

        let feed = state.store.notifications();
        assert_eq!(feed[0].title, "New Client Added");
        assert!(feed[0].description.contains("Quinn Harper"));
    }

    #[actix_web::test]
    async fn updating_an_unknown_client_is_not_found() {
        let app = test::init_service(app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/dashboard/clients/nope")
                .set_json(new_client())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "not_found");
    }

    #[actix_web::test]
    async fn deleting_a_client_leaves_its_appointments_alone() {
        let state = test_utils::state();
        let appointments_before = state.store.appointments();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/dashboard").service(remove),
            ),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/dashboard/clients/1")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(state.store.clients().iter().all(|client| client.id != "1"));
        assert_eq!(state.store.appointments(), appointments_before);
    }
}
