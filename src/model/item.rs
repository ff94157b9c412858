//! Inventory items and the document stored for each of them.
//!
//! The collection holds one [`StockLevel`] document per item, keyed by [`ItemName`].
//! [`InventoryItem`] is the row the view works with: the key and the quantity together.

use crate::inventory_actor::InventoryError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Name of an inventory item, used as the document key.
///
/// Surrounding whitespace is trimmed; a name that is empty after trimming is rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InventoryError::BlankName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of an inventory document: `{ "quantity": <number> }`.
///
/// # Document Store
/// This struct implements the [`Document`](doc_store::Document) trait, so it is what the
/// [`CollectionActor`](doc_store::CollectionActor) of the `inventory` collection stores.
/// See [`crate::inventory_actor::document`] for the write hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub quantity: u64,
}

impl StockLevel {
    pub fn new(quantity: u64) -> Self {
        Self { quantity }
    }
}

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: ItemName,
    pub quantity: u64,
}

impl InventoryItem {
    pub fn new(name: ItemName, quantity: u64) -> Self {
        Self { name, quantity }
    }

    /// Case-insensitive substring match on the name. `needle` must already be lowercase.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.as_str().to_lowercase().contains(needle)
    }
}

/// What an add or remove did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    /// A new document was written with this quantity.
    Created { name: ItemName, quantity: u64 },
    /// An existing document was rewritten with this quantity.
    Updated { name: ItemName, quantity: u64 },
    /// The document was deleted because the quantity reached zero.
    Removed { name: ItemName },
    /// Nothing was written.
    Skipped(SkipReason),
}

/// Why a mutation wrote nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankName,
    NonPositiveAmount,
    /// Remove of an item that is not in the collection.
    Missing,
}

impl StockChange {
    /// Whether the store was consulted. Only these changes refresh the list and reset
    /// the row's increment factor.
    pub fn reached_store(&self) -> bool {
        !matches!(
            self,
            StockChange::Skipped(SkipReason::BlankName | SkipReason::NonPositiveAmount)
        )
    }
}

impl Display for StockChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockChange::Created { name, quantity } => write!(f, "added {} ({})", name, quantity),
            StockChange::Updated { name, quantity } => write!(f, "{} is now {}", name, quantity),
            StockChange::Removed { name } => write!(f, "removed {}", name),
            StockChange::Skipped(SkipReason::BlankName) => {
                f.write_str("nothing to do: item name is blank")
            }
            StockChange::Skipped(SkipReason::NonPositiveAmount) => {
                f.write_str("nothing to do: amount must be greater than zero")
            }
            StockChange::Skipped(SkipReason::Missing) => f.write_str("nothing to do: no such item"),
        }
    }
}
