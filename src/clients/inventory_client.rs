//! # Inventory Client
//!
//! Wraps a `CollectionClient<StockLevel>` and carries the inventory rules: merge on add,
//! delete when a remove reaches zero.
//!
//! Each rule is a read followed by a separate write. Nothing locks the document between
//! the two, so concurrent writers to the same item can lose an update.

use crate::inventory_actor::InventoryError;
use crate::model::{InventoryItem, ItemName, SkipReason, StockChange, StockLevel};
use async_trait::async_trait;
use doc_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for the `inventory` collection.
#[derive(Clone)]
pub struct InventoryClient {
    inner: CollectionClient<StockLevel>,
}

impl InventoryClient {
    pub fn new(inner: CollectionClient<StockLevel>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentClient<StockLevel> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &CollectionClient<StockLevel> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            // Rejections raised by our own write hook come back unchanged.
            StoreError::Document(inner) => match inner.downcast::<InventoryError>() {
                Ok(err) => *err,
                Err(other) => InventoryError::StoreUnavailable(other.to_string()),
            },
            err @ (StoreError::Io(_)
            | StoreError::Serialization(_)
            | StoreError::CollectionMismatch { .. }
            | StoreError::DuplicateKey { .. }) => InventoryError::Persistence(err.to_string()),
            err @ (StoreError::ActorClosed | StoreError::ActorDropped) => {
                InventoryError::StoreUnavailable(err.to_string())
            }
        }
    }
}

impl InventoryClient {
    /// Fetches every item, in the collection's enumeration order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        debug!("Sending request");
        let documents = self.list().await?;
        Ok(documents
            .into_iter()
            .map(|doc| InventoryItem::new(doc.key, doc.data.quantity))
            .collect())
    }

    /// Adds `delta` to the item, creating it if absent. A zero `delta` writes nothing.
    #[instrument(skip(self))]
    pub async fn add_stock(&self, name: ItemName, delta: u64) -> Result<StockChange, InventoryError> {
        if delta == 0 {
            debug!("Zero amount, skipping");
            return Ok(StockChange::Skipped(SkipReason::NonPositiveAmount));
        }

        match self.fetch(name.clone()).await? {
            Some(existing) => {
                let quantity = existing.quantity.checked_add(delta).ok_or_else(|| {
                    InventoryError::QuantityOverflow {
                        name: name.to_string(),
                        current: existing.quantity,
                        delta,
                    }
                })?;
                self.write(name.clone(), quantity).await?;
                info!(%name, quantity, "Stock increased");
                Ok(StockChange::Updated { name, quantity })
            }
            None => {
                self.write(name.clone(), delta).await?;
                info!(%name, quantity = delta, "Item created");
                Ok(StockChange::Created {
                    name,
                    quantity: delta,
                })
            }
        }
    }

    /// Takes `delta` from the item, deleting it when nothing would be left.
    ///
    /// An absent item is left absent. A zero `delta` rewrites the current quantity.
    #[instrument(skip(self))]
    pub async fn remove_stock(
        &self,
        name: ItemName,
        delta: u64,
    ) -> Result<StockChange, InventoryError> {
        match self.fetch(name.clone()).await? {
            None => {
                debug!(%name, "No such item");
                Ok(StockChange::Skipped(SkipReason::Missing))
            }
            Some(existing) if existing.quantity <= delta => {
                self.delete(name.clone()).await?;
                info!(%name, "Item removed");
                Ok(StockChange::Removed { name })
            }
            Some(existing) => {
                let quantity = existing.quantity - delta;
                self.write(name.clone(), quantity).await?;
                info!(%name, quantity, "Stock decreased");
                Ok(StockChange::Updated { name, quantity })
            }
        }
    }

    async fn write(&self, name: ItemName, quantity: u64) -> Result<StockLevel, InventoryError> {
        self.inner
            .set(name, StockLevel::new(quantity))
            .await
            .map_err(Self::map_error)
    }
}
