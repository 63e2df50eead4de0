use chrono::Utc;
use duolog_sessions::{
    ConsentStatus, SessionError, SessionSettings, SessionStatus, SessionStore, StorageMode,
};
use std::time::Duration;

fn full_consent() -> ConsentStatus {
    ConsentStatus {
        person_a: true,
        person_b: true,
        timestamp: Utc::now(),
    }
}

fn partial_consent(person_a: bool, person_b: bool) -> ConsentStatus {
    ConsentStatus {
        person_a,
        person_b,
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_with_dual_consent() {
    let store = SessionStore::new();

    let session = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&session.id).is_ok());
    assert_eq!(session.status, SessionStatus::Recording);
    assert_eq!(session.settings.storage_mode, StorageMode::Ephemeral);
    assert!(session.consent.person_a);
    assert!(session.consent.person_b);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_generates_unique_ids() {
    let store = SessionStore::new();

    let first = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();
    let second = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_create_rejected_without_both_consents() {
    let store = SessionStore::new();

    for (a, b) in [(false, false), (true, false), (false, true)] {
        let err = store
            .create(partial_consent(a, b), SessionSettings::default())
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::ConsentIncomplete);
    }

    // Nothing was stored by any of the rejected attempts
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_get_returns_stored_record() {
    let store = SessionStore::new();

    let settings = SessionSettings {
        storage_mode: StorageMode::TranscriptOnly,
        voice_id: "voice-7".to_string(),
        comm_tags: vec!["calm".to_string(), "direct".to_string()],
    };

    let created = store.create(full_consent(), settings).await.unwrap();
    let fetched = store.get(&created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.status, SessionStatus::Recording);
    assert_eq!(fetched.settings.storage_mode, StorageMode::TranscriptOnly);
    assert_eq!(fetched.settings.voice_id, "voice-7");
    assert_eq!(fetched.settings.comm_tags, vec!["calm", "direct"]);
}

#[tokio::test]
async fn test_get_unknown_id() {
    let store = SessionStore::new();

    let err = store.get("no-such-session").await.unwrap_err();
    assert_eq!(err, SessionError::NotFound("no-such-session".to_string()));
    assert!(err.to_string().contains("no-such-session"));
}

#[tokio::test]
async fn test_list_most_recent_first() {
    let store = SessionStore::new();

    let first = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn test_list_returns_detached_copies() {
    let store = SessionStore::new();

    store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();
    store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    let mut listed = store.list().await;
    listed.pop();
    listed.clear();

    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_delete_then_get() {
    let store = SessionStore::new();

    let session = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    store.delete(&session.id).await.unwrap();

    let err = store.get(&session.id).await.unwrap_err();
    assert_eq!(err, SessionError::NotFound(session.id.clone()));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_store_intact() {
    let store = SessionStore::new();

    store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    let err = store.delete("no-such-session").await.unwrap_err();
    assert_eq!(err, SessionError::NotFound("no-such-session".to_string()));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_second_delete_fails() {
    let store = SessionStore::new();

    let session = store
        .create(full_consent(), SessionSettings::default())
        .await
        .unwrap();

    store.delete(&session.id).await.unwrap();

    // Delete is not silently idempotent: the second call reports NotFound
    let err = store.delete(&session.id).await.unwrap_err();
    assert_eq!(err, SessionError::NotFound(session.id.clone()));
}
