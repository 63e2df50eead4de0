use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consent state for both conversation participants
///
/// Wire format is camelCase (`personA`, `personB`); a missing `timestamp`
/// is stamped with the current time at parse and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentStatus {
    /// Whether the first participant has agreed to the recording
    #[serde(default)]
    pub person_a: bool,

    /// Whether the second participant has agreed to the recording
    #[serde(default)]
    pub person_b: bool,

    /// When consent was captured
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// How much of a session is retained after the conversation ends
///
/// Interpreted by downstream processing, not by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StorageMode {
    /// Nothing is kept once the session is deleted
    #[default]
    Ephemeral,
    /// Keep the transcript, discard the audio
    TranscriptOnly,
    /// Keep transcript and audio
    Full,
}

/// Per-session settings supplied by the client at creation
///
/// Every field has a default, so an empty `settings` object is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSettings {
    /// Retention policy for this session
    pub storage_mode: StorageMode,

    /// Voice profile for playback (empty = none selected)
    pub voice_id: String,

    /// Communication-style tags attached by the client
    pub comm_tags: Vec<String>,
}

/// Processing state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Recording,
    Processing,
    Ready,
    Failed,
}

/// A consent-gated conversation record
///
/// `id` and `created_at` are assigned by the store at creation and are
/// immutable. Sessions are never constructed from a request body directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Server-generated UUID
    pub id: String,

    /// Creation time, set once
    pub created_at: DateTime<Utc>,

    /// Consent state captured at creation
    pub consent: ConsentStatus,

    /// Client-supplied settings
    pub settings: SessionSettings,

    /// Always `recording` at creation; transitions happen in downstream
    /// pipelines, not here
    #[serde(default)]
    pub status: SessionStatus,
}
