//! The document store handle applications hold after resolution.

use crate::{
    backend::StoreBackend,
    collection::{Collection, TypedCollection},
    error::StoreResult,
    record::Record,
};

/// A document store bound to a concrete backend implementation.
///
/// The store owns its backend. Construct it once at startup and hand
/// references to whichever components need collection access.
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Gets an untyped collection handle with the given name.
    ///
    /// The name is passed to the backend unchanged.
    pub fn collection<'a>(&'a self, name: &str) -> Collection<'a, B> {
        Collection::new(name.to_string(), &self.backend)
    }

    /// Gets a typed collection handle for the record type `R`.
    ///
    /// The collection name is determined by the record type's
    /// `collection_name()` method.
    pub fn typed_collection<'a, R: Record>(&'a self) -> TypedCollection<'a, B, R> {
        TypedCollection::new(R::collection_name().to_string(), &self.backend)
    }

    /// Shuts down the store and releases backend resources.
    ///
    /// This consumes the store and should be called when no longer needed.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.backend.shutdown().await?;

        Ok(())
    }
}
