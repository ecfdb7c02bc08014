//! The in-memory fallback store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use bson::{Bson, Document};
use mea::rwlock::RwLock;

use eventlayer_core::{
    backend::{InsertOneResult, StoreBackend, StoreBackendBuilder},
    error::StoreResult,
};

/// The only collection name the fallback store retains data for.
///
/// The surrounding application only ever writes event records; any other
/// collection name resolves to a stub that yields nothing on enumeration and
/// retains nothing on insertion.
pub const EVENTS_COLLECTION: &str = "events";

/// In-memory, process-lifetime substitute for the real document store.
///
/// Cloning the store shares the same underlying sequence, as does every
/// collection handle obtained from it: an insert through one handle is
/// visible through any other obtained later.
///
/// # Identifiers
///
/// Inserted documents are assigned an `_id` equal to the string form of
/// (current sequence length + 1). There are no removal operations, so
/// identifiers stay dense and unique for the lifetime of the store.
///
/// # Thread Safety
///
/// The shared sequence sits behind an async read-write lock: enumeration
/// takes a read lock and clones a snapshot, insertion takes a write lock so
/// no two insertions interleave mid-append.
#[derive(Default, Clone, Debug)]
pub struct FallbackStore {
    events: Arc<RwLock<Vec<Document>>>,
}

impl FallbackStore {
    /// Creates a new empty fallback store.
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a builder for constructing a `FallbackStore`.
    pub fn builder() -> FallbackStoreBuilder {
        FallbackStoreBuilder::default()
    }
}

#[async_trait]
impl StoreBackend for FallbackStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        if collection != EVENTS_COLLECTION {
            return Ok(Vec::new());
        }

        Ok(self.events.read().await.clone())
    }

    async fn insert_one(
        &self,
        document: Document,
        collection: &str,
    ) -> StoreResult<InsertOneResult> {
        if collection != EVENTS_COLLECTION {
            // Unsupported collections accept the write but discard it.
            return Ok(InsertOneResult { inserted_id: Bson::Null });
        }

        let mut events = self.events.write().await;
        let id = (events.len() + 1).to_string();

        let mut stored = document;
        stored.insert("_id", id.clone());
        events.push(stored);

        Ok(InsertOneResult { inserted_id: Bson::String(id) })
    }
}

/// Builder for constructing [`FallbackStore`] instances.
///
/// Building always succeeds.
#[derive(Default)]
pub struct FallbackStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for FallbackStoreBuilder {
    type Backend = FallbackStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(FallbackStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use eventlayer_core::store::DocumentStore;

    #[tokio::test]
    async fn assigns_dense_string_ids_in_insertion_order() {
        let store = FallbackStore::new();

        let mut ids = Vec::new();
        for name in ["boot", "login", "shutdown"] {
            let result = store
                .insert_one(doc! { "name": name }, EVENTS_COLLECTION)
                .await
                .unwrap();
            ids.push(result.inserted_id);
        }
        assert_eq!(
            ids,
            vec![
                Bson::String("1".into()),
                Bson::String("2".into()),
                Bson::String("3".into()),
            ],
        );

        let events = store.find_all(EVENTS_COLLECTION).await.unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].get_str("name").unwrap(), "boot");
        assert_eq!(events[0].get_str("_id").unwrap(), "1");
        assert_eq!(events[2].get_str("name").unwrap(), "shutdown");
        assert_eq!(events[2].get_str("_id").unwrap(), "3");
    }

    #[tokio::test]
    async fn handles_over_one_store_share_the_sequence() {
        let store = DocumentStore::new(FallbackStore::new());

        let writer = store.collection(EVENTS_COLLECTION);
        let reader = store.collection(EVENTS_COLLECTION);

        writer
            .insert_one(doc! { "kind": "signup" })
            .await
            .unwrap();

        let seen = reader.find_all().await.unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].get_str("kind").unwrap(), "signup");
    }

    #[tokio::test]
    async fn clones_share_the_sequence() {
        let store = FallbackStore::new();
        let clone = store.clone();

        store
            .insert_one(doc! { "n": 1 }, EVENTS_COLLECTION)
            .await
            .unwrap();

        assert_eq!(clone.find_all(EVENTS_COLLECTION).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unsupported_collections_discard_inserts() {
        let store = FallbackStore::new();

        let result = store
            .insert_one(doc! { "a": 1 }, "other")
            .await
            .unwrap();
        assert_eq!(result.inserted_id, Bson::Null);

        assert!(store.find_all("other").await.unwrap().is_empty());
        // The document is not retained anywhere, the events sequence included.
        assert!(
            store
                .find_all(EVENTS_COLLECTION)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn find_all_returns_a_snapshot() {
        let store = FallbackStore::new();
        store
            .insert_one(doc! { "n": 1 }, EVENTS_COLLECTION)
            .await
            .unwrap();

        let snapshot = store.find_all(EVENTS_COLLECTION).await.unwrap();
        store
            .insert_one(doc! { "n": 2 }, EVENTS_COLLECTION)
            .await
            .unwrap();

        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test]
    async fn caller_supplied_id_is_overwritten() {
        let store = FallbackStore::new();
        store
            .insert_one(doc! { "_id": "custom", "n": 1 }, EVENTS_COLLECTION)
            .await
            .unwrap();

        let events = store.find_all(EVENTS_COLLECTION).await.unwrap();
        assert_eq!(events[0].get_str("_id").unwrap(), "1");
    }

    #[tokio::test]
    async fn builder_always_succeeds() {
        let store = FallbackStore::builder().build().await.unwrap();

        assert!(
            store
                .find_all(EVENTS_COLLECTION)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
