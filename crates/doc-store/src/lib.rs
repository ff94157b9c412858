//! # Doc Store
//!
//! A small document store built on the actor model: one Tokio task owns a collection of
//! keyed documents and answers requests sent over a channel by cloneable clients.
//!
//! The store is deliberately dumb. It offers point reads, upserts, deletes and a full
//! listing; it has no conditional writes and no transactions. Business rules belong to
//! the callers, which compose these primitives (a read followed by a write is two
//! round trips, and another writer may interleave).
//!
//! ## Layers
//!
//! 1. **Document** ([`Document`]) - the stored body, its key type and write hooks.
//! 2. **Server** ([`CollectionActor`]) - owns the collection, processes requests one at a time.
//! 3. **Interface** ([`CollectionClient`], [`DocumentClient`]) - typed async calls.
//! 4. **Durability** ([`Snapshot`]) - optional JSON snapshot rewritten after each write.
//!
//! ## Example
//!
//! ```rust
//! use doc_store::{CollectionActor, Document};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note { text: String }
//!
//! impl Document for Note {
//!     type Key = String;
//!     type Error = std::io::Error;
//!     const COLLECTION: &'static str = "notes";
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CollectionActor::<Note>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     client.set("greeting".into(), Note { text: "hello".into() }).await.unwrap();
//!     let note = client.get("greeting".into()).await.unwrap().unwrap();
//!     assert_eq!(note.text, "hello");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockCollection`, a scripted stand-in for the actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::DocumentClient;
pub use document::{Document, StoredDocument};
pub use error::StoreError;
pub use message::{CollectionRequest, Response};
pub use snapshot::Snapshot;

use std::path::PathBuf;

/// Default channel capacity of a collection actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// How a collection actor is opened.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Channel capacity between clients and the actor.
    pub buffer_size: usize,
    /// Snapshot file; `None` keeps the collection in memory only.
    pub snapshot: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            snapshot: None,
        }
    }
}
