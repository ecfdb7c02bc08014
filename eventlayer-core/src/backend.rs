//! Storage backend abstraction.
//!
//! [`StoreBackend`] is the seam between the store handle an application holds
//! and the two concrete implementations behind it: the MongoDB adapter and
//! the in-memory fallback. The surface is deliberately small (enumerate a
//! collection, insert one document) because that is the entire contract
//! the surrounding application depends on.

use async_trait::async_trait;
use bson::{Bson, Document};
use std::fmt::Debug;

use crate::error::StoreResult;

/// Outcome of a single-document insertion.
///
/// `inserted_id` carries whatever identifier the backend assigned to the
/// stored document. A backend that accepted the write but did not retain it
/// reports `Bson::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOneResult {
    pub inserted_id: Bson,
}

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// Implementations must be safe for concurrent use from multiple async
/// tasks once the resolved handle is published. The exact locking discipline
/// is implementation-specific.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Returns every document currently held in `collection`, as a snapshot,
    /// in insertion order where the backend defines one.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Inserts `document` into `collection` and reports the identifier the
    /// backend assigned to it.
    async fn insert_one(
        &self,
        document: Document,
        collection: &str,
    ) -> StoreResult<InsertOneResult>;

    /// Releases backend resources.
    ///
    /// The default implementation is a no-op; backends holding external
    /// connections override it.
    async fn shutdown(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Factory trait for creating backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}
