//! Consent-gated session management
//!
//! This module provides the session data model and the in-memory store that
//! owns every live session:
//! - `Session` / `ConsentStatus` / `SessionSettings` data types
//! - Dual-consent validation before a session may be created
//! - Create / get / list / delete store operations

mod consent;
mod error;
mod model;
mod store;

pub use consent::dual_consent_given;
pub use error::SessionError;
pub use model::{ConsentStatus, Session, SessionSettings, SessionStatus, StorageMode};
pub use store::SessionStore;
