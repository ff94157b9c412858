//! Type-safe wrappers around [`CollectionClient`](doc_store::CollectionClient).

pub mod inventory_client;

pub use inventory_client::*;
