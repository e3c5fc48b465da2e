//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every API endpoint with its utoipa annotation and serves Swagger UI at
//! `/api/docs`. Requests are traced with `tower-http`'s `TraceLayer`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/affiliations` - Create an affiliation
/// - `GET /api/affiliations` - List affiliations
/// - `GET /api/affiliations/{id}` - Get an affiliation
/// - `POST /api/members` - Create a member
/// - `GET /api/members` - List the members of a scope
/// - `GET /api/members/{id}` - Get a member in any state
/// - `PATCH /api/members/{id}` - Update an active member
/// - `DELETE /api/members/{id}` - Soft-delete an active member
/// - `POST /api/members/{id}/restore` - Restore a soft-deleted member
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster API"), tags(
        (name = controller::affiliation::AFFILIATION_TAG, description = "Affiliation API routes"),
        (name = controller::member::MEMBER_TAG, description = "Member API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::affiliation::create_affiliation,
            controller::affiliation::list_affiliations
        ))
        .routes(routes!(controller::affiliation::get_affiliation))
        .routes(routes!(
            controller::member::create_member,
            controller::member::list_members
        ))
        .routes(routes!(
            controller::member::get_member,
            controller::member::update_member,
            controller::member::delete_member
        ))
        .routes(routes!(controller::member::restore_member))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
