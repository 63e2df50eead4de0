//! HTTP API server for the session backend
//!
//! This module provides the REST surface over the session store:
//! - GET / - Service banner
//! - GET /health - Health check
//! - GET /health/ready - Readiness probe
//! - POST {prefix}/sessions - Create a consent-gated session
//! - GET {prefix}/sessions/:id - Fetch one session
//! - GET {prefix}/sessions - List sessions, most recent first
//! - DELETE {prefix}/sessions/:id - Delete a session

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
