//! Core traits for typed, serde-backed records.
//!
//! A [`Record`] is a value stored in a fixed collection. Unlike raw BSON
//! documents, records are (de)serialized through serde, so an application can
//! work with plain structs while the backend stores schema-free documents.

use bson::{Bson, Document, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::error::{StoreError, StoreResult};

/// Core trait for values stored in a named collection.
///
/// Records do not carry their own identifier: the backend assigns an `_id`
/// field at insertion time, and deserialization tolerates it as an unknown
/// field.
///
/// # Example
///
/// ```ignore
/// use eventlayer_core::record::Record;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Event {
///     pub kind: String,
///     pub actor: String,
/// }
///
/// impl Record for Event {
///     fn collection_name() -> &'static str {
///         "events"
///     }
/// }
/// ```
pub trait Record: Serialize + DeserializeOwned + Send + Sync + Clone + 'static {
    /// Returns the name of the collection this record type is stored in.
    fn collection_name() -> &'static str;
}

/// Extension trait providing conversion utilities for records.
///
/// Automatically implemented for every type that implements [`Record`].
pub trait RecordExt: Record {
    /// Converts this record to a BSON document for storage.
    fn to_document(&self) -> StoreResult<Document>;

    /// Creates a record from a stored BSON document.
    fn from_document(document: Document) -> StoreResult<Self>;

    /// Converts this record to a JSON value.
    fn to_json(&self) -> StoreResult<Value>;

    /// Creates a record from a JSON value.
    fn from_json(value: Value) -> StoreResult<Self>;
}

impl<R: Record> RecordExt for R {
    fn to_document(&self) -> StoreResult<Document> {
        match serialize_to_bson(self)? {
            Bson::Document(document) => Ok(document),
            _ => Err(StoreError::InvalidDocument(
                "record did not serialize to a document".into(),
            )),
        }
    }

    fn from_document(document: Document) -> StoreResult<Self> {
        Ok(deserialize_from_bson(Bson::Document(document))?)
    }

    fn to_json(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> StoreResult<Self> {
        Ok(from_value(value)?)
    }
}
