use super::handlers;
use super::state::AppState;
use crate::config::HttpConfig;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, http: &HttpConfig) -> Router {
    let sessions = Router::new()
        .route(
            "/sessions",
            get(handlers::list_sessions).post(handlers::create_session),
        )
        .route(
            "/sessions/:session_id",
            get(handlers::get_session).delete(handlers::delete_session),
        );

    Router::new()
        // Banner and health probes live outside the versioned prefix
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/health/ready", get(handlers::readiness_check))
        // Session CRUD under the configurable API prefix
        .nest(&http.api_prefix, sessions)
        .layer(cors_layer(&http.allowed_origins))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS allow-list from configuration.
///
/// All methods and headers are permitted for listed origins. Origins that
/// fail to parse are skipped with a warning rather than taking the server
/// down.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unparseable CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
