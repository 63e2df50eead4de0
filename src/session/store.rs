use super::consent::dual_consent_given;
use super::error::SessionError;
use super::model::{ConsentStatus, Session, SessionSettings, SessionStatus};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// In-memory session store (session id → session)
///
/// Owns every live `Session` for the lifetime of the process; there is no
/// durability across restarts. Callers receive clones, and the collection is
/// only reachable through the operations below. Each operation takes the
/// lock exactly once and releases it before returning, so concurrent
/// handlers see each create/get/list/delete as atomic.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create and store a new session.
    ///
    /// Consent is validated before an id is generated: a rejected request
    /// leaves the store untouched and consumes no id.
    pub async fn create(
        &self,
        consent: ConsentStatus,
        settings: SessionSettings,
    ) -> Result<Session, SessionError> {
        if !dual_consent_given(&consent) {
            warn!("Session creation rejected: missing consent");
            return Err(SessionError::ConsentIncomplete);
        }

        let session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            consent,
            settings,
            status: SessionStatus::Recording,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        info!("Session created: {}", session.id);

        Ok(session)
    }

    /// Look up a session by id.
    pub async fn get(&self, id: &str) -> Result<Session, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// All stored sessions, most recent first.
    ///
    /// Returns a fresh vector of clones; mutating the result does not affect
    /// the store. Sessions with identical creation times have no defined
    /// relative order.
    pub async fn list(&self) -> Vec<Session> {
        let sessions = self.sessions.read().await;
        let mut all: Vec<Session> = sessions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Remove a session.
    ///
    /// Deleting an absent id fails with `NotFound`, including the second
    /// delete of an id that was just removed.
    pub async fn delete(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        match sessions.remove(id) {
            Some(_) => {
                info!("Session deleted: {}", id);
                Ok(())
            }
            None => Err(SessionError::NotFound(id.to_string())),
        }
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
