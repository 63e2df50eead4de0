use super::state::AppState;
use crate::session::{ConsentStatus, Session, SessionError, SessionSettings};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Consent state for both participants (both must be true)
    pub consent: ConsentStatus,

    /// Session settings; every field defaults, so this may be omitted
    #[serde(default)]
    pub settings: SessionSettings,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session: Session,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP status for each session error variant
fn error_status(err: &SessionError) -> StatusCode {
    match err {
        SessionError::ConsentIncomplete => StatusCode::BAD_REQUEST,
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Service banner
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: format!("{} api", state.config.service.name),
            version: state.config.service.version.clone(),
        }),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            service: state.config.service.name.clone(),
            version: state.config.service.version.clone(),
        }),
    )
}

/// GET /health/ready
/// Readiness probe for deployment health checks
pub async fn readiness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ReadinessResponse {
            status: "ready".to_string(),
            timestamp: Utc::now(),
        }),
    )
}

/// POST {prefix}/sessions
/// Create a new consent-gated session
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    info!("Creating new session");

    match state.store.create(req.consent, req.settings).await {
        Ok(session) => {
            let message = format!("session {} created successfully", session.id);
            (
                StatusCode::CREATED,
                Json(CreateSessionResponse { session, message }),
            )
                .into_response()
        }
        Err(e) => {
            warn!("Session creation failed: {}", e);
            (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET {prefix}/sessions/:session_id
/// Fetch a single session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&session_id).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => {
            warn!("Session {} not found", session_id);
            (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET {prefix}/sessions
/// List all sessions, most recent first
pub async fn list_sessions(State(state): State<AppState>) -> impl IntoResponse {
    let sessions = state.store.list().await;
    info!("Listing {} sessions", sessions.len());
    (StatusCode::OK, Json(sessions))
}

/// DELETE {prefix}/sessions/:session_id
/// Delete a session (the only way a session is ever destroyed)
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&session_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteSessionResponse {
                message: format!("session {} deleted successfully", session_id),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Session {} not found for deletion", session_id);
            (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
