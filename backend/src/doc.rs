//! OpenAPI documentation configuration.
//!
//! Generates the OpenAPI specification for the REST surface. Swagger UI
//! serves it in debug builds at `/docs`.

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;

/// Enrich the generated document with the session flag security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "SessionFlags",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "auth_token",
                "Plain session flag issued by POST /login; paired with user_role.",
            ))),
        );
    }
}

/// OpenAPI document for the dashboard API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "BizView backend API",
        description = "Role-gated business dashboard: clients, financials, \
                       calendar, forecasting and notifications."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionFlags" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::health::healthz,
        crate::inbound::http::overview::overview,
        crate::inbound::http::financials::list,
        crate::inbound::http::financials::replace,
        crate::inbound::http::financials::select_currency,
        crate::inbound::http::clients::list,
        crate::inbound::http::clients::create,
        crate::inbound::http::clients::update,
        crate::inbound::http::clients::remove,
        crate::inbound::http::calendar::list,
        crate::inbound::http::calendar::replace,
        crate::inbound::http::search::search,
        crate::inbound::http::forecasting::generate,
        crate::inbound::http::notifications::list,
        crate::inbound::http::notifications::create,
        crate::inbound::http::profile::view,
        crate::inbound::http::profile::update,
        crate::inbound::http::settings::list,
        crate::inbound::http::settings::update,
        crate::inbound::http::support::contact,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::Session,
        crate::domain::session::Role,
        crate::domain::finance::Currency,
        crate::domain::finance::PeriodSummary,
        crate::domain::finance::MonthOverMonth,
        crate::domain::records::Client,
        crate::domain::records::ClientStatus,
        crate::domain::records::FinancialRecord,
        crate::domain::records::RecordKind,
        crate::domain::records::Appointment,
        crate::domain::records::Notification,
        crate::domain::records::Profile,
        crate::inbound::http::auth::LoginRequest,
        crate::inbound::http::overview::OverviewResponse,
        crate::inbound::http::financials::FinancialsResponse,
        crate::inbound::http::financials::CurrencySelection,
        crate::inbound::http::clients::NewClient,
        crate::inbound::http::search::SearchResponse,
        crate::inbound::http::forecasting::ForecastRequest,
        crate::inbound::http::forecasting::ForecastResponse,
        crate::inbound::http::notifications::NewNotification,
        crate::inbound::http::profile::ProfileResponse,
        crate::inbound::http::support::SupportContact,
        crate::inbound::http::health::Health,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_the_gated_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/login"));
        assert!(paths.contains_key("/dashboard"));
        assert!(paths.contains_key("/dashboard/financials"));
        assert!(paths.contains_key("/dashboard/settings/{role}"));
    }
}
