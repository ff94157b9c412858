//! # Document Trait
//!
//! The `Document` trait is the contract every stored body must satisfy to live in a
//! [`CollectionActor`](crate::CollectionActor). It fixes the key type, the error type
//! reported by the write hooks, and the name of the collection the documents belong to.
//!
//! # Provided Methods (Hooks)
//! - [`Document::on_write`] runs before a document is stored and may reject it.
//! - [`Document::on_delete`] runs before a document is removed.
//!
//! Both default to `Ok(())`, so a plain data type only has to name its associated types.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// A document body addressed by a caller-supplied key.
///
/// Keys are chosen by the caller (there is no id generator): writing to an existing key
/// replaces the body, writing to a new key creates it. Collections enumerate in ascending
/// key order, hence the `Ord` bound.
///
/// `Serialize`/`DeserializeOwned` on both the key and the body allow a collection to be
/// written to and restored from a [`Snapshot`](crate::Snapshot).
#[async_trait]
pub trait Document:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The key a document is stored under (e.g. an item name).
    type Key: Ord + Clone + Send + Sync + Display + Debug + Serialize + DeserializeOwned;

    /// The error type returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the collection, used in logs and snapshot files.
    const COLLECTION: &'static str;

    /// Called before the document is stored under `key`.
    async fn on_write(&mut self, _key: &Self::Key) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the document stored under `key` is removed.
    async fn on_delete(&self, _key: &Self::Key) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A document together with the key it is stored under, as returned by a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument<D: Document> {
    pub key: D::Key,
    pub data: D,
}

impl<D: Document> StoredDocument<D> {
    pub fn new(key: D::Key, data: D) -> Self {
        Self { key, data }
    }
}
