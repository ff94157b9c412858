//! # Collection Client
//!
//! The generic, cloneable handle used to talk to a [`CollectionActor`](crate::CollectionActor).

use crate::document::{Document, StoredDocument};
use crate::error::StoreError;
use crate::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a document collection.
///
/// Holds only the sending half of the actor's channel, so cloning is cheap and clones
/// can be handed to any task. Every call is one request/response round trip.
#[derive(Clone)]
pub struct CollectionClient<D: Document> {
    sender: mpsc::Sender<CollectionRequest<D>>,
}

impl<D: Document> CollectionClient<D> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<D>>) -> Self {
        Self { sender }
    }

    /// Reads the document stored under `key`, if any.
    pub async fn get(&self, key: D::Key) -> Result<Option<D>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Get { key, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Creates or replaces the document stored under `key`.
    ///
    /// Returns the document as stored, after the write hook ran.
    pub async fn set(&self, key: D::Key, document: D) -> Result<D, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Set {
                key,
                document,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Removes the document stored under `key`. Returns `false` if there was none.
    pub async fn delete(&self, key: D::Key) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Delete { key, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Enumerates every document in ascending key order.
    pub async fn list(&self) -> Result<Vec<StoredDocument<D>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
