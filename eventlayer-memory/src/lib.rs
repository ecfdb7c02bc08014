//! In-memory fallback backend for eventlayer.
//!
//! This crate provides [`FallbackStore`], the process-lifetime substitute
//! used when no real document database is configured or reachable. It keeps
//! a single shared sequence of event documents behind an async-aware
//! read-write lock and stubs out every other collection name.
//!
//! Nothing here persists: the store's contents live exactly as long as the
//! store itself.

pub mod store;

pub use store::{EVENTS_COLLECTION, FallbackStore, FallbackStoreBuilder};
