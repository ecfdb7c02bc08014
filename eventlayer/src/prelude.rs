//! Convenient re-exports of commonly used eventlayer types.
//!
//! ```ignore
//! use eventlayer::prelude::*;
//! ```

pub use eventlayer_core::{
    backend::{InsertOneResult, StoreBackend, StoreBackendBuilder},
    collection::{Collection, TypedCollection},
    error::{StoreError, StoreResult},
    record::{Record, RecordExt},
    store::DocumentStore,
};

pub use crate::{
    config::StoreConfig,
    resolve::{FallbackReason, ResolvedBackend, ResolvedStore, resolve, resolve_with_config},
};
