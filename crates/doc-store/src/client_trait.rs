//! # DocumentClient Trait
//!
//! Domain clients wrap a [`CollectionClient`] and translate [`StoreError`] into their own
//! error type. Implementing [`DocumentClient`] gives them `fetch`, `delete` and `list`
//! for free; they only add the operations that carry domain rules.

use crate::{CollectionClient, Document, StoreError, StoredDocument};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the plain store operations.
#[async_trait]
pub trait DocumentClient<D: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<D>;

    /// Map store errors to the collection-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read a document by key.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, key: D::Key) -> Result<Option<D>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Delete a document by key. Returns whether it existed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, key: D::Key) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(key).await.map_err(Self::map_error)
    }

    /// Enumerate the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<StoredDocument<D>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
