//! End-to-end behavior of store resolution and the fallback handle.

use bson::{Bson, doc};
use serde::{Deserialize, Serialize};

use eventlayer::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Event {
    kind: String,
    actor: String,
}

impl Record for Event {
    fn collection_name() -> &'static str {
        "events"
    }
}

#[tokio::test]
async fn missing_config_selects_the_fallback() {
    let store = resolve_with_config(None).await;

    assert!(store.is_fallback());
    assert_eq!(store.fallback_reason(), Some(&FallbackReason::MissingConfig));
}

#[tokio::test]
async fn rejected_connection_string_selects_the_fallback() {
    // SRV connection strings cannot carry a port, so this fails during
    // client construction without reaching any network.
    let config = StoreConfig {
        cluster_address: "localhost:27017".into(),
        username: "app".into(),
        password: "hunter2".into(),
        database: "prod".into(),
    };

    let store = resolve_with_config(Some(config)).await;

    assert!(store.is_fallback());
    assert!(matches!(
        store.fallback_reason(),
        Some(FallbackReason::ConnectionFailed(_))
    ));
}

#[tokio::test]
async fn fallback_collection_handles_share_one_sequence() {
    let store = resolve_with_config(None).await;

    let first = store.collection("events");
    let second = store.collection("events");

    first
        .insert_one(doc! { "kind": "signup" })
        .await
        .unwrap();

    let seen = second.find_all().await.unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].get_str("kind").unwrap(), "signup");
}

#[tokio::test]
async fn fallback_assigns_sequential_string_ids() {
    let store = resolve_with_config(None).await;
    let events = store.collection("events");

    for (n, kind) in ["created", "updated", "deleted"].iter().enumerate() {
        let inserted = events.insert_one(doc! { "kind": *kind }).await.unwrap();
        assert_eq!(inserted.inserted_id, Bson::String((n + 1).to_string()));
    }

    let all = events.find_all().await.unwrap();
    assert_eq!(all.len(), 3);
    for (n, event) in all.iter().enumerate() {
        assert_eq!(event.get_str("_id").unwrap(), (n + 1).to_string());
    }
    assert_eq!(all[0].get_str("kind").unwrap(), "created");
    assert_eq!(all[2].get_str("kind").unwrap(), "deleted");
}

#[tokio::test]
async fn fallback_discards_writes_to_other_collections() {
    let store = resolve_with_config(None).await;
    let other = store.collection("other");

    let inserted = other.insert_one(doc! { "a": 1 }).await.unwrap();
    assert_eq!(inserted.inserted_id, Bson::Null);
    assert!(other.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn typed_records_round_through_the_fallback() {
    let store = resolve_with_config(None).await;
    let events = store.typed_collection::<Event>();

    let event = Event {
        kind: "signup".into(),
        actor: "alice".into(),
    };
    let inserted = events.insert_one(&event).await.unwrap();
    assert_eq!(inserted.inserted_id, Bson::String("1".into()));

    let all = events.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].kind, "signup");
    assert_eq!(all[0].actor, "alice");
}

#[tokio::test]
async fn fallback_store_can_shut_down() {
    let store = resolve_with_config(None).await;

    store.shutdown().await.unwrap();
}
