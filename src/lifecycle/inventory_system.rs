use crate::clients::InventoryClient;
use crate::inventory_actor::{self, InventoryError};
use doc_store::StoreConfig;
use tracing::{error, info};

/// Owns the running inventory actor.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::open(&config.store_config()).await?;
/// let mut view = InventoryView::new(system.inventory_client.clone());
/// view.add_item("apples", 3).await?;
///
/// // Every client clone must be gone before shutdown can finish.
/// drop(view);
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts an in-memory inventory.
    pub fn new() -> Self {
        let (actor, inventory_client) = inventory_actor::new();
        let handle = tokio::spawn(actor.run());
        Self {
            inventory_client,
            handles: vec![handle],
        }
    }

    /// Starts the inventory described by `config`, restoring its snapshot first.
    pub async fn open(config: &StoreConfig) -> Result<Self, InventoryError> {
        let (actor, inventory_client) = inventory_actor::open(config).await?;
        info!(
            snapshot = ?config.snapshot,
            size = actor.len(),
            "Inventory opened"
        );
        let handle = tokio::spawn(actor.run());
        Ok(Self {
            inventory_client,
            handles: vec![handle],
        })
    }

    /// Drops the system's client and waits for the actor to finish.
    ///
    /// The actor only stops once every clone of the client has been dropped, so callers
    /// must release theirs first or this waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory...");
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Inventory shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
