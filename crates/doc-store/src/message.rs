//! # Collection Messages
//!
//! Requests sent from a [`CollectionClient`](crate::CollectionClient) to a
//! [`CollectionActor`](crate::CollectionActor).

use crate::document::{Document, StoredDocument};
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the actor.
///
/// The four variants are the whole store surface: point read, upsert, delete, and a
/// full enumeration. There are no conditional writes; a read-modify-write is two
/// separate requests and another writer may interleave between them.
#[derive(Debug)]
pub enum CollectionRequest<D: Document> {
    Get {
        key: D::Key,
        respond_to: Response<Option<D>>,
    },
    Set {
        key: D::Key,
        document: D,
        respond_to: Response<D>,
    },
    /// Responds with whether a document existed under `key`.
    Delete {
        key: D::Key,
        respond_to: Response<bool>,
    },
    List {
        respond_to: Response<Vec<StoredDocument<D>>>,
    },
}
