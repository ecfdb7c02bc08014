//! MongoDB storage backend for eventlayer.
//!
//! A thin adapter over the official `mongodb` driver exposing the two
//! operations the store contract requires, plus the administrative `ping`
//! used as a liveness check during resolution.
//!
//! Collection names are handed to the driver verbatim; concurrency safety is
//! delegated entirely to the driver's client, which is safe to share across
//! tasks.

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
