//! HTTP server assembly.
//!
//! Builds the dependency bundle from configuration, mounts every route, and
//! wraps the whole application in the trace and gate middleware. The gate is
//! application-wide: `/healthz` passes through untouched because it is
//! neither a login nor a dashboard path.

mod config;

pub use config::ServerConfig;

use std::io;
use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::ports::{CollectionStore, FixtureForecastService, ForecastService, StorageError};
use crate::domain::session::{PlainFlagSessions, SessionProvider};
use crate::domain::store::DataStore;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http;
use crate::inbound::http::state::HttpState;
use crate::middleware::{AccessGate, Trace};
use crate::outbound::forecast::HttpForecastService;
use crate::outbound::persistence::{FileCollectionStore, MemoryCollectionStore};

/// Assemble the dependency bundle described by `config`.
pub fn build_state(config: &ServerConfig) -> Result<web::Data<HttpState>, StorageError> {
    let backing: Arc<dyn CollectionStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileCollectionStore::open(dir)?),
        None => Arc::new(MemoryCollectionStore::default()),
    };
    let store = Arc::new(DataStore::open(backing));
    let sessions: Arc<dyn SessionProvider> = Arc::new(PlainFlagSessions::new(store.clone()));
    let forecast: Arc<dyn ForecastService> = match &config.forecast_url {
        Some(url) => Arc::new(HttpForecastService::new(url.clone())),
        None => Arc::new(FixtureForecastService),
    };
    Ok(web::Data::new(HttpState::new(
        store,
        sessions,
        forecast,
        config.cookie_secure,
    )))
}

/// Build the full application over `state`. Shared between the server
/// entry-point and integration tests.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let gate = AccessGate::new(state.sessions.clone());
    let dashboard = web::scope("/dashboard")
        .service(http::overview::overview)
        .service(http::financials::list)
        .service(http::financials::replace)
        .service(http::financials::select_currency)
        .service(http::clients::list)
        .service(http::clients::create)
        .service(http::clients::update)
        .service(http::clients::remove)
        .service(http::calendar::list)
        .service(http::calendar::replace)
        .service(http::search::search)
        .service(http::forecasting::generate)
        .service(http::notifications::list)
        .service(http::notifications::create)
        .service(http::profile::view)
        .service(http::profile::update)
        .service(http::settings::list)
        .service(http::settings::update)
        .service(http::support::contact);

    let mut app = App::new()
        .app_data(state)
        .service(http::auth::login)
        .service(http::auth::logout)
        .service(http::health::healthz)
        .service(dashboard)
        .wrap(gate)
        .wrap(Trace);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url(
            "/api-docs/openapi.json",
            ApiDoc::openapi(),
        ));
    }

    app
}

/// Run the server until it is shut down.
pub async fn run(config: ServerConfig) -> io::Result<()> {
    let state = build_state(&config).map_err(io::Error::other)?;
    HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run()
        .await
}
