//! # Inventory Actor
//!
//! The `inventory` collection: a [`CollectionActor`] of [`StockLevel`] documents keyed by
//! item name.
//!
//! ## Structure
//!
//! - [`document`] - [`Document`](doc_store::Document) implementation for [`StockLevel`]
//! - [`error`] - [`InventoryError`]
//! - [`new()`] / [`open()`] - factories returning the actor and its [`InventoryClient`]
//!
//! ## Usage
//!
//! ```rust
//! use inventory_tracker::inventory_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = inventory_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let name = inventory_tracker::model::ItemName::parse("apples")?;
//!     client.add_stock(name, 3).await?;
//!     assert_eq!(client.list_all().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;

pub use error::*;

use crate::clients::InventoryClient;
use crate::model::StockLevel;
use doc_store::{CollectionActor, DocumentClient, StoreConfig, DEFAULT_BUFFER_SIZE};

/// Creates an in-memory inventory actor and its client.
pub fn new() -> (CollectionActor<StockLevel>, InventoryClient) {
    let (actor, inner) = CollectionActor::new(DEFAULT_BUFFER_SIZE);
    (actor, InventoryClient::new(inner))
}

/// Creates an inventory actor from `config`, restoring its snapshot if one is set.
pub async fn open(
    config: &StoreConfig,
) -> Result<(CollectionActor<StockLevel>, InventoryClient), InventoryError> {
    let (actor, inner) = CollectionActor::open(config)
        .await
        .map_err(InventoryClient::map_error)?;
    Ok((actor, InventoryClient::new(inner)))
}
