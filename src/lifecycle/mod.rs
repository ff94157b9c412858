//! Orchestration: starting and stopping the inventory collection actor.

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::InventorySystem;
pub use self::tracing::setup_tracing;
