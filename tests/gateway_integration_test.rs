use httpmock::prelude::*;
use tokio_test::assert_ok;
use std::sync::Arc;
use studio_catalog::core::gateway::CATALOG_KEY;
use studio_catalog::domain::ports::Storage;
use studio_catalog::utils::error::{CatalogError, Result};
use studio_catalog::{
    Catalog, CatalogStore, Category, CliConfig, LocalStorage, PersistenceGateway, SaveStatus,
    Service,
};
use tempfile::TempDir;

fn sample_catalog() -> Catalog {
    Catalog {
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        currency_symbol: "$".to_string(),
        location: "Kellyville".to_string(),
        phone: "0400 000 000".to_string(),
        note: "Limited Spots Available".to_string(),
        categories: vec![Category {
            id: "c1".to_string(),
            name: "Eyelash Extensions".to_string(),
            sort_order: 1,
            is_active: true,
            services: vec![Service {
                id: "s1".to_string(),
                name: "Volume Lashes".to_string(),
                price: 60.0,
                description: None,
                duration_mins: Some(90),
                sort_order: 1,
                is_active: true,
            }],
        }],
    }
}

fn test_config(storage_path: &str, default_catalog_url: String) -> CliConfig {
    CliConfig {
        storage_path: storage_path.to_string(),
        default_catalog_url,
        webhook_url: "https://example.com/hook".to_string(),
        admin_secret: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_load_prefers_persisted_copy_over_default_fetch() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let catalog = sample_catalog();
    std::fs::write(
        temp_dir.path().join(CATALOG_KEY),
        serde_json::to_vec(&catalog).unwrap(),
    )
    .unwrap();

    let server = MockServer::start();
    let default_mock = server.mock(|when, then| {
        when.method(GET).path("/pricing.json");
        then.status(200).json_body(serde_json::json!({}));
    });

    let storage = LocalStorage::new(base_path.clone());
    let config = test_config(&base_path, server.url("/pricing.json"));
    let store = CatalogStore::shared();
    let gateway = PersistenceGateway::new(storage, config, Arc::clone(&store));

    let loaded = gateway.load().await;
    assert_eq!(loaded, Some(catalog.clone()));
    assert_eq!(store.lock().await.catalog(), Some(&catalog));
    assert_eq!(default_mock.hits(), 0);
}

#[tokio::test]
async fn test_load_fetches_default_when_no_persisted_copy() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let catalog = sample_catalog();
    let server = MockServer::start();
    let default_mock = server.mock(|when, then| {
        when.method(GET).path("/pricing.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::to_value(&catalog).unwrap());
    });

    let storage = LocalStorage::new(base_path.clone());
    let config = test_config(&base_path, server.url("/pricing.json"));
    let store = CatalogStore::shared();
    let gateway = PersistenceGateway::new(storage, config, Arc::clone(&store));

    let loaded = gateway.load().await;
    default_mock.assert();
    assert_eq!(loaded, Some(catalog.clone()));
    assert_eq!(store.lock().await.catalog(), Some(&catalog));
}

#[tokio::test]
async fn test_load_failure_leaves_store_unset() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pricing.json");
        then.status(500);
    });

    let storage = LocalStorage::new(base_path.clone());
    let config = test_config(&base_path, server.url("/pricing.json"));
    let store = CatalogStore::shared();
    let gateway = PersistenceGateway::new(storage, config, Arc::clone(&store));

    assert_eq!(gateway.load().await, None);
    let store = store.lock().await;
    assert!(store.catalog().is_none());
    assert_eq!(store.status(), SaveStatus::Idle);
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let storage = LocalStorage::new(base_path.clone());
    let config = test_config(&base_path, server.url("/pricing.json"));
    let store = CatalogStore::shared();
    let gateway = PersistenceGateway::new(storage, config, Arc::clone(&store));

    let catalog = sample_catalog();
    assert_ok!(gateway.save(&catalog).await);

    {
        let store = store.lock().await;
        assert_eq!(store.catalog(), Some(&catalog));
        assert_eq!(store.status(), SaveStatus::Saved);
    }

    // A fresh process would read the committed copy back, never the default.
    assert_eq!(gateway.load().await, Some(catalog));
}

#[tokio::test]
async fn test_export_snapshot_round_trips_the_loaded_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let catalog = sample_catalog();
    std::fs::write(
        temp_dir.path().join(CATALOG_KEY),
        serde_json::to_vec(&catalog).unwrap(),
    )
    .unwrap();

    let server = MockServer::start();
    let storage = LocalStorage::new(base_path.clone());
    let config = test_config(&base_path, server.url("/pricing.json"));
    let gateway = PersistenceGateway::new(storage, config, CatalogStore::shared());

    let loaded = gateway.load().await.unwrap();
    let exported =
        PersistenceGateway::<LocalStorage, CliConfig>::export_snapshot(&loaded).unwrap();
    let restored: Catalog = serde_json::from_slice(&exported).unwrap();
    assert_eq!(restored, catalog);
}

#[tokio::test(start_paused = true)]
async fn test_saved_status_resets_to_idle_after_delay() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let storage = LocalStorage::new(base_path.clone());
    let config = test_config(&base_path, server.url("/pricing.json"));
    let store = CatalogStore::shared();
    let gateway = PersistenceGateway::new(storage, config, Arc::clone(&store));

    gateway.save(&sample_catalog()).await.unwrap();
    assert_eq!(store.lock().await.status(), SaveStatus::Saved);

    tokio::time::sleep(std::time::Duration::from_secs(4)).await;
    tokio::task::yield_now().await;
    assert_eq!(store.lock().await.status(), SaveStatus::Idle);
}

/// Storage that serves a committed catalog but refuses every write.
#[derive(Clone)]
struct ReadOnlyStorage {
    committed: Vec<u8>,
}

impl Storage for ReadOnlyStorage {
    async fn read_file(&self, _key: &str) -> Result<Vec<u8>> {
        Ok(self.committed.clone())
    }

    async fn write_file(&self, _key: &str, _data: &[u8]) -> Result<()> {
        Err(CatalogError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "storage quota exceeded",
        )))
    }

    async fn remove_file(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failed_save_keeps_previously_committed_catalog() {
    let server = MockServer::start();
    let committed = sample_catalog();
    let storage = ReadOnlyStorage {
        committed: serde_json::to_vec(&committed).unwrap(),
    };
    let config = test_config("./unused", server.url("/pricing.json"));
    let store = CatalogStore::shared();
    let gateway = PersistenceGateway::new(storage, config, Arc::clone(&store));

    assert_eq!(gateway.load().await, Some(committed.clone()));

    let mut edited = committed.clone();
    edited.note = "Walk-ins welcome".to_string();

    let result = gateway.save(&edited).await;
    assert!(result.is_err());

    {
        let store = store.lock().await;
        assert_eq!(store.status(), SaveStatus::Error);
        assert_eq!(store.catalog(), Some(&committed));
    }

    // A subsequent load still yields the prior committed catalog.
    assert_eq!(gateway.load().await, Some(committed));
}
