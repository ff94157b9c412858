//! Error types for the inventory collection.

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The item name is empty after trimming.
    #[error("Item name must not be blank")]
    BlankName,

    /// A document with quantity zero was about to be stored; absence means zero.
    #[error("Refusing to store zero quantity for {0}")]
    ZeroQuantity(String),

    /// Adding would exceed the largest representable quantity.
    #[error("Quantity overflow for {name}: {current} + {delta}")]
    QuantityOverflow { name: String, current: u64, delta: u64 },

    /// A console command or argument could not be understood.
    #[error("{0}")]
    InvalidInput(String),

    /// The snapshot backing the collection could not be read or written.
    #[error("Inventory persistence error: {0}")]
    Persistence(String),

    /// The collection actor could not be reached.
    #[error("Inventory store unavailable: {0}")]
    StoreUnavailable(String),
}
