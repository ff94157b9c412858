//! # Store Errors
//!
//! Errors raised by the collection actor, its client, and snapshot persistence.

/// Errors that can occur within the document store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection actor closed")]
    ActorClosed,
    #[error("Collection actor dropped response channel")]
    ActorDropped,
    #[error("Document rejected: {0}")]
    Document(Box<dyn std::error::Error + Send + Sync>),
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Snapshot holds collection {found:?}, expected {expected:?}")]
    CollectionMismatch { expected: String, found: String },
    #[error("Snapshot holds key {key:?} more than once")]
    DuplicateKey { key: String },
}
