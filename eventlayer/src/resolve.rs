//! Store resolution: pick the real backend or the in-memory fallback.
//!
//! Resolution runs once at process startup and never fails: a missing
//! configuration and an unreachable cluster both produce a usable in-memory
//! handle, with the reason attached to the handle for observability. There
//! are no retries and no reconnection after the initial attempt.

use tracing::{info, warn};

use eventlayer_core::{
    backend::{InsertOneResult, StoreBackend, StoreBackendBuilder},
    collection::{Collection, TypedCollection},
    error::StoreResult,
    record::Record,
    store::DocumentStore,
};
use eventlayer_memory::FallbackStore;
use eventlayer_mongodb::MongoDbStore;

use crate::config::StoreConfig;

/// Why resolution selected the fallback store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// One or more connection environment variables were missing or empty.
    MissingConfig,
    /// The cluster was configured but connecting to or pinging it failed.
    ConnectionFailed(String),
}

/// The backend selected by resolution.
#[derive(Debug)]
pub enum ResolvedBackend {
    Mongo(MongoDbStore),
    Fallback(FallbackStore),
}

#[async_trait::async_trait]
impl StoreBackend for ResolvedBackend {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<bson::Document>> {
        match self {
            ResolvedBackend::Mongo(store) => store.find_all(collection).await,
            ResolvedBackend::Fallback(store) => store.find_all(collection).await,
        }
    }

    async fn insert_one(
        &self,
        document: bson::Document,
        collection: &str,
    ) -> StoreResult<InsertOneResult> {
        match self {
            ResolvedBackend::Mongo(store) => store.insert_one(document, collection).await,
            ResolvedBackend::Fallback(store) => store.insert_one(document, collection).await,
        }
    }

    async fn shutdown(self) -> StoreResult<()> {
        match self {
            ResolvedBackend::Mongo(store) => StoreBackend::shutdown(store).await,
            ResolvedBackend::Fallback(store) => StoreBackend::shutdown(store).await,
        }
    }
}

/// The store handle produced by [`resolve()`].
///
/// Construct it once at startup and hand references to whichever components
/// need collection access.
#[derive(Debug)]
pub struct ResolvedStore {
    store: DocumentStore<ResolvedBackend>,
    fallback: Option<FallbackReason>,
}

impl ResolvedStore {
    /// Gets an untyped collection handle with the given name.
    ///
    /// The name is passed to the selected backend unchanged.
    pub fn collection<'a>(&'a self, name: &str) -> Collection<'a, ResolvedBackend> {
        self.store.collection(name)
    }

    /// Gets a typed collection handle for the record type `R`.
    pub fn typed_collection<'a, R: Record>(&'a self) -> TypedCollection<'a, ResolvedBackend, R> {
        self.store.typed_collection()
    }

    /// Returns why the fallback store was selected, or `None` when the real
    /// backend is connected.
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        self.fallback.as_ref()
    }

    /// Whether this handle is backed by the in-memory fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Shuts the store down, releasing backend resources.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.store.shutdown().await
    }
}

/// Resolves the process's document store from the environment.
///
/// Reads the connection variables, attempts the real backend when all of
/// them are present, and otherwise (or on any connection failure)
/// substitutes the in-memory fallback. This function does not fail; call it
/// once at startup and share the returned handle.
pub async fn resolve() -> ResolvedStore {
    resolve_with_config(StoreConfig::from_env()).await
}

/// Resolves a store from an explicit configuration.
///
/// `None` selects the fallback immediately, without any network activity.
pub async fn resolve_with_config(config: Option<StoreConfig>) -> ResolvedStore {
    let Some(config) = config else {
        warn!("store environment variables not set, using in-memory fallback store");
        return fallback_store(FallbackReason::MissingConfig);
    };

    info!(database = %config.database, "trying to connect to document store");

    match connect(&config).await {
        Ok(store) => {
            info!("connected successfully to document store");
            ResolvedStore {
                store: DocumentStore::new(ResolvedBackend::Mongo(store)),
                fallback: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "connection failed, falling back to in-memory store");
            fallback_store(FallbackReason::ConnectionFailed(err.to_string()))
        }
    }
}

async fn connect(config: &StoreConfig) -> StoreResult<MongoDbStore> {
    let store = MongoDbStore::builder(&config.connection_uri(), &config.database)
        .build()
        .await?;

    match store.ping().await {
        Ok(()) => Ok(store),
        Err(err) => {
            // Release the half-established session before reporting failure.
            let _ = StoreBackend::shutdown(store).await;

            Err(err)
        }
    }
}

fn fallback_store(reason: FallbackReason) -> ResolvedStore {
    ResolvedStore {
        store: DocumentStore::new(ResolvedBackend::Fallback(FallbackStore::new())),
        fallback: Some(reason),
    }
}
