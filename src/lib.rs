pub mod config;
pub mod http;
pub mod session;

pub use config::Config;
pub use http::{create_router, AppState};
pub use session::{
    dual_consent_given, ConsentStatus, Session, SessionError, SessionSettings, SessionStatus,
    SessionStore, StorageMode,
};
