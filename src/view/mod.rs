//! # Inventory View
//!
//! Application state for the inventory screen, owned by whatever drives the UI and
//! passed to handlers by `&mut`. It holds the cached rows, the search text, the per-row
//! increment factors and the "new item" form.
//!
//! The cached rows are never patched in place. Every mutation that reaches the store is
//! followed by a full [`InventoryView::refresh`].

use crate::clients::InventoryClient;
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryItem, ItemName, SkipReason, StockChange};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// The "add new item" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemDraft {
    pub name: String,
    pub quantity: u64,
}

impl NewItemDraft {
    pub const DEFAULT_QUANTITY: u64 = 1;
}

impl Default for NewItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: Self::DEFAULT_QUANTITY,
        }
    }
}

pub struct InventoryView {
    client: InventoryClient,
    items: Vec<InventoryItem>,
    query: String,
    increments: HashMap<ItemName, u64>,
    draft: NewItemDraft,
}

impl InventoryView {
    /// Creates a view with an empty cache. Call [`refresh`](Self::refresh) to load it.
    pub fn new(client: InventoryClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            query: String::new(),
            increments: HashMap::new(),
            draft: NewItemDraft::default(),
        }
    }

    /// Replaces the cache with the full collection.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<&[InventoryItem], InventoryError> {
        self.items = self.client.list_all().await?;
        debug!(size = self.items.len(), "Inventory refreshed");
        Ok(&self.items)
    }

    /// Every cached row, unfiltered.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Adds `delta` of `name`, creating the item if needed, then refreshes.
    ///
    /// A blank name or a zero amount does nothing at all.
    pub async fn add_item(&mut self, name: &str, delta: u64) -> Result<StockChange, InventoryError> {
        let Ok(name) = ItemName::parse(name) else {
            return Ok(StockChange::Skipped(SkipReason::BlankName));
        };
        let change = self.client.add_stock(name.clone(), delta).await?;
        self.settle(&name, &change).await?;
        Ok(change)
    }

    /// Removes `delta` of `name`, deleting the item once nothing is left, then refreshes.
    ///
    /// Only a blank name is skipped; a zero amount still rewrites and refreshes the row.
    pub async fn remove_item(
        &mut self,
        name: &str,
        delta: u64,
    ) -> Result<StockChange, InventoryError> {
        let Ok(name) = ItemName::parse(name) else {
            return Ok(StockChange::Skipped(SkipReason::BlankName));
        };
        let change = self.client.remove_stock(name.clone(), delta).await?;
        self.settle(&name, &change).await?;
        Ok(change)
    }

    async fn settle(&mut self, name: &ItemName, change: &StockChange) -> Result<(), InventoryError> {
        if change.reached_store() {
            self.increments.insert(name.clone(), 0);
            self.refresh().await?;
        }
        Ok(())
    }

    /// Cached rows whose name contains `query`, ignoring case. No store round trip.
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        filter_by_name(&self.items, query)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rows matching the current search text.
    pub fn visible(&self) -> Vec<&InventoryItem> {
        self.search(&self.query)
    }

    /// The row's increment factor; 0 when never set.
    pub fn increment_for(&self, name: &str) -> u64 {
        ItemName::parse(name)
            .ok()
            .and_then(|name| self.increments.get(&name).copied())
            .unwrap_or(0)
    }

    pub fn set_increment(&mut self, name: &str, amount: u64) -> Result<(), InventoryError> {
        let name = ItemName::parse(name)?;
        self.increments.insert(name, amount);
        Ok(())
    }

    pub fn draft(&self) -> &NewItemDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NewItemDraft {
        &mut self.draft
    }

    /// Submits the "new item" form: an add with the draft's name and quantity.
    pub async fn submit_draft(&mut self) -> Result<StockChange, InventoryError> {
        let NewItemDraft { name, quantity } = self.draft.clone();
        self.add_item(&name, quantity).await
    }
}

/// Case-insensitive substring filter over item names. The empty query keeps every row.
pub fn filter_by_name<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.name_contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u64) -> InventoryItem {
        InventoryItem::new(ItemName::parse(name).unwrap(), quantity)
    }

    fn names<'a>(items: &[&'a InventoryItem]) -> Vec<&'a str> {
        items.iter().map(|&item| item.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_a_substring_match() {
        let items = vec![item("apple", 1), item("banana", 2)];
        assert_eq!(names(&filter_by_name(&items, "ap")), vec!["apple"]);
        assert_eq!(names(&filter_by_name(&items, "an")), vec!["banana"]);
    }

    #[test]
    fn test_search_ignores_case() {
        let items = vec![item("Green Apple", 1), item("banana", 2)];
        assert_eq!(names(&filter_by_name(&items, "APPLE")), vec!["Green Apple"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = vec![item("apple", 1), item("banana", 2)];
        assert_eq!(filter_by_name(&items, "").len(), 2);
        assert!(filter_by_name(&items, "cherry").is_empty());
    }
}
