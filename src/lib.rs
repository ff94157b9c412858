//! # Inventory Tracker
//!
//! Named inventory items with quantities, kept as one document per item in the
//! `inventory` collection of a [`doc_store`] actor.
//!
//! ## Layers
//!
//! - **[model]**: [`ItemName`](model::ItemName), the stored [`StockLevel`](model::StockLevel)
//!   document and the [`InventoryItem`](model::InventoryItem) row.
//! - **[inventory_actor]**: the collection actor for [`StockLevel`](model::StockLevel) and
//!   [`InventoryError`](inventory_actor::InventoryError).
//! - **[clients]**: [`InventoryClient`](clients::InventoryClient), where merge-on-add and
//!   delete-at-zero live.
//! - **[view]**: [`InventoryView`](view::InventoryView), the application state behind
//!   the screen (cached rows, search text, increment factors, new-item form).
//! - **[console]**: the line console that renders the table and drives the view.
//! - **[lifecycle]**: [`InventorySystem`](lifecycle::InventorySystem) and tracing setup.
//! - **[config]**: command-line options.
//!
//! ## Testing
//!
//! Clients are tested against [`doc_store::mock`]; the view and console against a real
//! in-memory actor.

pub mod clients;
pub mod config;
pub mod console;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod view;
