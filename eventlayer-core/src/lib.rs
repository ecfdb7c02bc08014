//! Core abstractions for the eventlayer document store.
//!
//! This crate defines the contract shared by every storage backend:
//!
//! - **Backend abstraction** ([`backend`]) - The [`backend::StoreBackend`] trait and its builder
//! - **Collection handles** ([`collection`]) - Named views exposing enumerate and insert-one
//! - **Records** ([`record`]) - Serde-backed typed documents bound to a collection
//! - **Document store** ([`store`]) - The handle an application holds after resolution
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use eventlayer_core::record::Record;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Event {
//!     pub kind: String,
//! }
//!
//! impl Record for Event {
//!     fn collection_name() -> &'static str {
//!         "events"
//!     }
//! }
//! ```

pub mod backend;
pub mod collection;
pub mod error;
pub mod record;
pub mod store;
