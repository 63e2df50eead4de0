use thiserror::Error;

/// Errors surfaced by session operations
///
/// Both variants are terminal for the request that caused them and leave the
/// store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The dual-consent precondition was not met
    #[error("both participants must consent before creating a session")]
    ConsentIncomplete,

    /// No session exists for the given id
    #[error("session {0} not found")]
    NotFound(String),
}
