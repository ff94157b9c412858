use doc_store::{DocumentClient, StoreConfig};
use inventory_tracker::inventory_actor::InventoryError;
use inventory_tracker::lifecycle::InventorySystem;
use inventory_tracker::model::{InventoryItem, ItemName, SkipReason, StockChange, StockLevel};
use inventory_tracker::view::InventoryView;

fn name(raw: &str) -> ItemName {
    ItemName::parse(raw).unwrap()
}

fn rows(view: &InventoryView) -> Vec<(String, u64)> {
    view.items()
        .iter()
        .map(|item| (item.name.to_string(), item.quantity))
        .collect()
}

async fn stored(system: &InventorySystem, raw: &str) -> Option<StockLevel> {
    system.inventory_client.fetch(name(raw)).await.unwrap()
}

#[tokio::test]
async fn test_add_creates_then_merges() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());

    let change = view.add_item("x", 3).await.unwrap();
    assert_eq!(
        change,
        StockChange::Created {
            name: name("x"),
            quantity: 3
        }
    );
    assert_eq!(stored(&system, "x").await, Some(StockLevel::new(3)));

    view.add_item("x", 2).await.unwrap();
    assert_eq!(stored(&system, "x").await, Some(StockLevel::new(5)));
    assert_eq!(rows(&view), vec![("x".to_string(), 5)]);

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_to_zero_deletes_the_document() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("x", 5).await.unwrap();

    let change = view.remove_item("x", 5).await.unwrap();
    assert_eq!(change, StockChange::Removed { name: name("x") });
    assert_eq!(stored(&system, "x").await, None);
    assert!(view.items().is_empty());

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_more_than_held_deletes_the_document() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("x", 2).await.unwrap();

    view.remove_item("x", 10).await.unwrap();
    assert_eq!(stored(&system, "x").await, None);

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_partial_remove_decrements() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("x", 5).await.unwrap();

    let change = view.remove_item("x", 2).await.unwrap();
    assert_eq!(
        change,
        StockChange::Updated {
            name: name("x"),
            quantity: 3
        }
    );
    assert_eq!(stored(&system, "x").await, Some(StockLevel::new(3)));

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_of_absent_item_creates_nothing() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());

    let change = view.remove_item("y", 1).await.unwrap();
    assert_eq!(change, StockChange::Skipped(SkipReason::Missing));
    assert_eq!(stored(&system, "y").await, None);
    assert!(system.inventory_client.list_all().await.unwrap().is_empty());

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_blank_names_and_zero_adds_are_skipped() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());

    assert_eq!(
        view.add_item("   ", 4).await.unwrap(),
        StockChange::Skipped(SkipReason::BlankName)
    );
    assert_eq!(
        view.remove_item("  ", 1).await.unwrap(),
        StockChange::Skipped(SkipReason::BlankName)
    );
    assert_eq!(
        view.add_item("x", 0).await.unwrap(),
        StockChange::Skipped(SkipReason::NonPositiveAmount)
    );
    assert!(system.inventory_client.list_all().await.unwrap().is_empty());

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_remove_refreshes_and_resets_the_row() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("x", 5).await.unwrap();

    // Another writer bumps the item behind the view's back.
    system.inventory_client.add_stock(name("x"), 2).await.unwrap();
    view.set_increment("x", 4).unwrap();
    assert_eq!(rows(&view), vec![("x".to_string(), 5)]);

    let change = view.remove_item("x", 0).await.unwrap();
    assert_eq!(
        change,
        StockChange::Updated {
            name: name("x"),
            quantity: 7
        }
    );
    assert_eq!(view.increment_for("x"), 0);
    assert_eq!(rows(&view), vec![("x".to_string(), 7)]);
    assert_eq!(stored(&system, "x").await, Some(StockLevel::new(7)));

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_names_are_trimmed_before_use_as_keys() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());

    view.add_item(" kiwi ", 1).await.unwrap();
    view.add_item("kiwi", 1).await.unwrap();
    assert_eq!(rows(&view), vec![("kiwi".to_string(), 2)]);

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_and_search() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("banana", 2).await.unwrap();
    view.add_item("apple", 1).await.unwrap();

    let listed = view.refresh().await.unwrap().to_vec();
    assert_eq!(
        listed,
        vec![
            InventoryItem::new(name("apple"), 1),
            InventoryItem::new(name("banana"), 2)
        ]
    );

    let found: Vec<&str> = view.search("ap").iter().map(|item| item.name.as_str()).collect();
    assert_eq!(found, vec!["apple"]);

    view.set_query("AN");
    let visible: Vec<&str> = view.visible().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(visible, vec!["banana"]);

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_mutation_resets_the_row_increment() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("x", 1).await.unwrap();

    view.set_increment("x", 4).unwrap();
    assert_eq!(view.increment_for(" x "), 4);

    // A skipped add keeps the factor.
    view.add_item("x", 0).await.unwrap();
    assert_eq!(view.increment_for("x"), 4);

    view.add_item("x", view.increment_for("x")).await.unwrap();
    assert_eq!(view.increment_for("x"), 0);
    assert_eq!(stored(&system, "x").await, Some(StockLevel::new(5)));

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_new_item_draft() {
    let system = InventorySystem::new();
    let mut view = InventoryView::new(system.inventory_client.clone());
    assert_eq!(view.draft().quantity, 1);

    view.draft_mut().name = "pear".to_string();
    view.submit_draft().await.unwrap();
    assert_eq!(stored(&system, "pear").await, Some(StockLevel::new(1)));

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        snapshot: Some(dir.path().join("inventory.json")),
        ..StoreConfig::default()
    };

    let system = InventorySystem::open(&config).await.unwrap();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.add_item("apple", 3).await.unwrap();
    view.add_item("banana", 2).await.unwrap();
    view.remove_item("banana", 2).await.unwrap();
    drop(view);
    system.shutdown().await.unwrap();

    let raw = std::fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["collection"], "inventory");
    assert_eq!(json["documents"]["apple"], serde_json::json!({ "quantity": 3 }));

    let system = InventorySystem::open(&config).await.unwrap();
    let mut view = InventoryView::new(system.inventory_client.clone());
    view.refresh().await.unwrap();
    assert_eq!(rows(&view), vec![("apple".to_string(), 3)]);

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_quantity_write_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"{"collection":"inventory","documents":{"x":{"quantity":4}}}"#)
        .unwrap();
    let config = StoreConfig {
        snapshot: Some(path),
        ..StoreConfig::default()
    };

    let system = InventorySystem::open(&config).await.unwrap();
    let result = system
        .inventory_client
        .inner()
        .set(name("x"), StockLevel::new(0))
        .await
        .map_err(inventory_tracker::clients::InventoryClient::map_error);
    assert_eq!(result, Err(InventoryError::ZeroQuantity("x".to_string())));
    assert_eq!(stored(&system, "x").await, Some(StockLevel::new(4)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_with_zero_quantity_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"{"collection":"inventory","documents":{"x":{"quantity":0}}}"#)
        .unwrap();
    let config = StoreConfig {
        snapshot: Some(path),
        ..StoreConfig::default()
    };

    let result = InventorySystem::open(&config).await;
    assert!(matches!(result, Err(InventoryError::ZeroQuantity(ref name)) if name == "x"));
}

#[tokio::test]
async fn test_snapshot_keys_equal_after_trimming_are_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(
        &path,
        r#"{"collection":"inventory","documents":{"x":{"quantity":1}," x ":{"quantity":7}}}"#,
    )
    .unwrap();
    let config = StoreConfig {
        snapshot: Some(path),
        ..StoreConfig::default()
    };

    match InventorySystem::open(&config).await {
        Err(InventoryError::Persistence(message)) => assert!(message.contains("\"x\""), "{}", message),
        Err(other) => panic!("Expected Persistence error, got {:?}", other),
        Ok(_) => panic!("Expected Persistence error, got a running inventory"),
    }
}

#[tokio::test]
async fn test_snapshot_of_another_collection_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"{"collection":"orders","documents":{}}"#).unwrap();
    let config = StoreConfig {
        snapshot: Some(path),
        ..StoreConfig::default()
    };

    let result = InventorySystem::open(&config).await;
    assert!(matches!(result, Err(InventoryError::Persistence(_))));
}

#[tokio::test]
async fn test_store_stopped_mid_session_is_reported_as_unavailable() {
    let (actor, client) = inventory_tracker::inventory_actor::new();
    let handle = tokio::spawn(actor.run());
    let mut view = InventoryView::new(client);
    view.add_item("x", 1).await.unwrap();

    handle.abort();
    let _ = handle.await;

    let result = view.add_item("x", 1).await;
    assert!(matches!(result, Err(InventoryError::StoreUnavailable(_))));
    assert!(matches!(
        view.refresh().await,
        Err(InventoryError::StoreUnavailable(_))
    ));
    // The cache still shows the last successful listing.
    assert_eq!(rows(&view), vec![("x".to_string(), 1)]);
}
