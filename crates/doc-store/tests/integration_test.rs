use doc_store::{CollectionActor, Document, DocumentClient, CollectionClient, StoreConfig, StoreError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Shelf {
    books: u32,
}

impl Document for Shelf {
    type Key = String;
    type Error = std::io::Error;
    const COLLECTION: &'static str = "shelves";
}

struct ShelfClient {
    inner: CollectionClient<Shelf>,
}

impl DocumentClient<Shelf> for ShelfClient {
    type Error = String;

    fn inner(&self) -> &CollectionClient<Shelf> {
        &self.inner
    }

    fn map_error(e: StoreError) -> String {
        e.to_string()
    }
}

fn config_at(path: std::path::PathBuf) -> StoreConfig {
    StoreConfig {
        snapshot: Some(path),
        ..StoreConfig::default()
    }
}

/// A snapshot-backed collection keeps its documents across a restart.
#[tokio::test]
async fn test_snapshot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path().join("shelves.json"));

    let (actor, client) = CollectionActor::<Shelf>::open(&config).await.unwrap();
    let handle = tokio::spawn(actor.run());
    client.set("hall".into(), Shelf { books: 4 }).await.unwrap();
    client.set("attic".into(), Shelf { books: 9 }).await.unwrap();
    client.set("cellar".into(), Shelf { books: 1 }).await.unwrap();
    assert!(client.delete("cellar".into()).await.unwrap());
    drop(client);
    handle.await.unwrap();

    let (actor, client) = CollectionActor::<Shelf>::open(&config).await.unwrap();
    assert_eq!(actor.len(), 2);
    let handle = tokio::spawn(actor.run());

    let shelves = ShelfClient { inner: client };
    let listed = shelves.list().await.unwrap();
    let keys: Vec<&str> = listed.iter().map(|doc| doc.key.as_str()).collect();
    assert_eq!(keys, vec!["attic", "hall"]);
    assert_eq!(
        shelves.fetch("hall".into()).await.unwrap(),
        Some(Shelf { books: 4 })
    );
    assert_eq!(shelves.fetch("cellar".into()).await.unwrap(), None);

    drop(shelves);
    handle.await.unwrap();
}

/// When the snapshot cannot be written, the write is undone and reported.
#[tokio::test]
async fn test_failed_snapshot_rolls_back_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelves.json");
    let config = config_at(path.clone());

    let (actor, client) = CollectionActor::<Shelf>::open(&config).await.unwrap();
    tokio::spawn(actor.run());

    // A directory where the temp file should go makes every save fail.
    std::fs::create_dir(dir.path().join("shelves.json.tmp")).unwrap();

    let result = client.set("hall".into(), Shelf { books: 4 }).await;
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert_eq!(client.get("hall".into()).await.unwrap(), None);
    assert!(!path.exists());
}

/// Clients observe a shut down collection as closed.
#[tokio::test]
async fn test_client_after_shutdown() {
    let (actor, client) = CollectionActor::<Shelf>::new(4);
    let shelves = ShelfClient {
        inner: client.clone(),
    };
    let handle = tokio::spawn(actor.run());
    handle.abort();
    let _ = handle.await;

    let result = shelves.list().await;
    assert_eq!(result.unwrap_err(), "Collection actor closed");
}
