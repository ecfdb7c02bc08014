//! Environment-driven document store resolution with an in-memory fallback.
//!
//! This crate is the entry point of the eventlayer workspace. At startup an
//! application calls [`resolve()`], which reads MongoDB connection parameters
//! from the environment and produces a single [`ResolvedStore`] handle:
//! backed by the real cluster when every parameter is present and the
//! cluster answers a ping, and by an in-memory substitute otherwise.
//! Resolution never fails; the caller always receives a usable handle.
//!
//! # Quick start
//!
//! ```ignore
//! use eventlayer::{bson::doc, resolve};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Falls back to the in-memory store when MONGODB_* is not configured.
//!     let store = resolve().await;
//!
//!     let events = store.collection("events");
//!     let inserted = events.insert_one(doc! { "kind": "startup" }).await.unwrap();
//!     println!("inserted id: {:?}", inserted.inserted_id);
//!
//!     for event in events.find_all().await.unwrap() {
//!         println!("{event}");
//!     }
//! }
//! ```
//!
//! # Typed records
//!
//! Applications that prefer structs over raw BSON implement [`record::Record`]
//! and use [`ResolvedStore::typed_collection`]:
//!
//! ```ignore
//! use eventlayer::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Event {
//!     kind: String,
//!     actor: String,
//! }
//!
//! impl Record for Event {
//!     fn collection_name() -> &'static str {
//!         "events"
//!     }
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - the in-memory fallback store
//! - [`mongodb`] - the MongoDB backend

pub mod config;
pub mod prelude;
pub mod resolve;

pub use eventlayer_core::{backend, collection, error, record, store};

pub use config::StoreConfig;
pub use resolve::{FallbackReason, ResolvedBackend, ResolvedStore, resolve, resolve_with_config};

// Re-export BSON types for convenience
pub use bson;

/// In-memory fallback backend.
pub mod memory {
    pub use eventlayer_memory::{EVENTS_COLLECTION, FallbackStore, FallbackStoreBuilder};
}

/// MongoDB backend.
pub mod mongodb {
    pub use eventlayer_mongodb::{MongoDbStore, MongoDbStoreBuilder};
}
