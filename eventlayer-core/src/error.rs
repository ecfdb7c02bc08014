//! Error types and result types for store operations.
//!
//! Use [`StoreResult<T>`] as the return type for fallible operations.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when resolving or operating
/// a document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Conversion between a record and its BSON/JSON form failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during connection setup or client construction.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// A value that was expected to be a document was something else.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
