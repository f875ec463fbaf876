//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, slots};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Randevu API",
        version = "1.0.0",
        description = "Appointment slot availability REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Slots
        slots::available_slots,
        slots::admin_availability,
    ),
    components(
        schemas(
            // Slots
            crate::models::slot::AvailableSlotsQuery,
            crate::models::slot::AvailableSlotsResponse,
            crate::models::slot::AdminAvailabilityQuery,
            crate::models::slot::AdminAvailabilityResponse,
            crate::models::slot::BusySlotEntry,
            crate::models::slot::WorkingHours,
            crate::models::slot::SourceType,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "slots", description = "Appointment slot availability")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
