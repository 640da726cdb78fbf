use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, Uri},
    middleware,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    handlers,
    middleware::{
        metrics_middleware, request_id_middleware, require_admin_key, ADMIN_KEY_HEADER,
        REQUEST_ID_HEADER,
    },
    openapi::ApiDoc,
    AppConfig, AppError,
};

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, ADMIN_KEY_HEADER])
        .expose_headers([REQUEST_ID_HEADER]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    let cors = cors_layer(&state.config);

    let service_routes = Router::new()
        .route("/", get(handlers::services_handler::list_services))
        .route("/seed", post(handlers::services_handler::seed_services));

    let worker_routes = Router::new()
        .route("/", get(handlers::workers_handler::list_workers))
        .route("/", post(handlers::workers_handler::create_worker))
        .route("/by-service/{title}", get(handlers::workers_handler::get_workers_by_service))
        .route("/{id}", get(handlers::workers_handler::get_worker));

    let engagement_routes = Router::new()
        .route("/", get(handlers::engagements_handler::list_engagements))
        .route("/", post(handlers::engagements_handler::create_engagement));

    let user_routes = Router::new()
        .route("/", get(handlers::users_handler::list_users))
        .route("/", post(handlers::users_handler::create_user))
        .route("/{id}/engagements", get(handlers::users_handler::get_user_engagements))
        .route("/{id}/engagements", post(handlers::users_handler::link_engagement));

    let opinion_routes = Router::new()
        .route("/by-worker/{worker_id}", get(handlers::opinions_handler::get_opinions_by_worker))
        .route("/{worker_id}", post(handlers::opinions_handler::create_opinion));

    let tracking_routes = Router::new().route("/", post(handlers::tracking_handler::record_ping));

    // Admin routes, all behind X-Admin-Key
    let admin_routes = Router::new()
        .route("/debug", get(handlers::debug_handler))
        .route("/reset-schema", post(handlers::admin_handler::reset_schema))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin_key));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/services", service_routes)
        .nest("/workers", worker_routes)
        .nest("/engagements", engagement_routes)
        .nest("/users", user_routes)
        .nest("/opinions", opinion_routes)
        .nest("/tracking", tracking_routes)
        .nest("/admin", admin_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/swagger-ui", get(swagger_ui))
        .fallback(route_not_found)
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors)
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn swagger_ui() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Laburantes API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
    "#)
}
