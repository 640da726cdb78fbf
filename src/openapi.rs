use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

use crate::middleware::ADMIN_KEY_HEADER;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Laburantes API",
        version = "1.0.0",
        description = "Backend for the laburantes local-services marketplace: service catalog, workers, engagements, users, opinions and device tracking"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Services
        crate::handlers::services_handler::list_services,
        crate::handlers::services_handler::seed_services,

        // Workers
        crate::handlers::workers_handler::create_worker,
        crate::handlers::workers_handler::list_workers,
        crate::handlers::workers_handler::get_worker,
        crate::handlers::workers_handler::get_workers_by_service,

        // Engagements
        crate::handlers::engagements_handler::create_engagement,
        crate::handlers::engagements_handler::list_engagements,

        // Users
        crate::handlers::users_handler::create_user,
        crate::handlers::users_handler::list_users,
        crate::handlers::users_handler::link_engagement,
        crate::handlers::users_handler::get_user_engagements,

        // Opinions
        crate::handlers::opinions_handler::create_opinion,
        crate::handlers::opinions_handler::get_opinions_by_worker,

        // Tracking
        crate::handlers::tracking_handler::record_ping,

        // Admin
        crate::handlers::debug::debug_handler,
        crate::handlers::admin_handler::reset_schema,
    ),
    components(
        schemas(
            // Core models
            crate::models::Service,
            crate::models::ServiceList,
            crate::models::Worker,
            crate::models::WorkerSummary,
            crate::models::WorkersByService,
            crate::models::Engagement,
            crate::models::User,
            crate::models::UserEngagement,
            crate::models::Opinion,

            // Input models
            crate::models::CreateWorkerInput,
            crate::models::CreateEngagementInput,
            crate::models::CreateUserInput,
            crate::models::LinkEngagementInput,
            crate::models::CreateOpinionInput,
            crate::models::TrackingPingInput,

            // Responses
            crate::models::CreatedResponse,
            crate::models::MessageResponse,
            crate::models::SeedResponse,
            crate::models::TrackingAck,
            crate::handlers::debug::DebugInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "services", description = "Service catalog"),
        (name = "workers", description = "Worker registry"),
        (name = "engagements", description = "Services offered by workers"),
        (name = "users", description = "User registry and contacted engagements"),
        (name = "opinions", description = "Worker ratings"),
        (name = "tracking", description = "Device location pings"),
        (name = "admin", description = "Operational endpoints behind X-Admin-Key"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER.as_str()))),
            )
        }
    }
}
