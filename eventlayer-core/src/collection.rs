//! Collection handles for store operations.
//!
//! A collection handle is a named view over a backend. Handles are cheap to
//! create and hold no data of their own: two handles obtained from the same
//! store for the same name observe the same underlying documents.
//!
//! Exactly two operations exist: enumerate everything and insert one
//! document. There is no update, delete, or filtered query.

use bson::Document;
use std::marker::PhantomData;

use crate::{
    backend::{InsertOneResult, StoreBackend},
    error::StoreResult,
    record::{Record, RecordExt},
};

/// An untyped collection handle bound to a storage backend.
///
/// Documents are handled as raw BSON, providing maximum flexibility without
/// compile-time type safety.
#[derive(Debug)]
pub struct Collection<'a, B: StoreBackend> {
    name: String,
    backend: &'a B,
}

impl<'a, B: StoreBackend> Collection<'a, B> {
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a snapshot of every document in the collection, in insertion
    /// order where the backend defines one.
    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.backend.find_all(self.name()).await
    }

    /// Inserts one document, returning the identifier the backend assigned.
    pub async fn insert_one(&self, document: Document) -> StoreResult<InsertOneResult> {
        self.backend
            .insert_one(document, self.name())
            .await
    }
}

/// A type-safe collection handle for a specific [`Record`] type.
///
/// The collection name is taken from the record type's `collection_name()`.
#[derive(Debug)]
pub struct TypedCollection<'a, B: StoreBackend, R: Record> {
    name: String,
    backend: &'a B,
    _marker: PhantomData<R>,
}

impl<'a, B: StoreBackend, R: Record> TypedCollection<'a, B, R> {
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend, _marker: PhantomData }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns every record in the collection, deserialized.
    ///
    /// Backend-assigned fields that are not part of the record type (such as
    /// `_id`) are ignored during deserialization.
    pub async fn find_all(&self) -> StoreResult<Vec<R>> {
        self.backend
            .find_all(self.name())
            .await?
            .into_iter()
            .map(R::from_document)
            .collect()
    }

    /// Serializes and inserts one record, returning the identifier the
    /// backend assigned.
    pub async fn insert_one(&self, record: &R) -> StoreResult<InsertOneResult> {
        self.backend
            .insert_one(record.to_document()?, self.name())
            .await
    }
}
