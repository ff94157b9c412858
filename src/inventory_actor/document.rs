//! [`Document`] implementation for [`StockLevel`], the body of every document in the
//! `inventory` collection.

use crate::inventory_actor::InventoryError;
use crate::model::{ItemName, StockLevel};
use async_trait::async_trait;
use doc_store::Document;

#[async_trait]
impl Document for StockLevel {
    type Key = ItemName;
    type Error = InventoryError;
    const COLLECTION: &'static str = "inventory";

    /// Rejects zero quantities: an item with no stock is represented by deleting it.
    async fn on_write(&mut self, key: &ItemName) -> Result<(), InventoryError> {
        if self.quantity == 0 {
            return Err(InventoryError::ZeroQuantity(key.to_string()));
        }
        Ok(())
    }
}
