use crate::core::store::SharedStore;
use crate::domain::model::{Catalog, SaveStatus};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Storage key for the persisted catalog document.
pub const CATALOG_KEY: &str = "pricing.json";

/// How long the `Saved` confirmation stays up before dropping back to idle.
const SAVED_RESET: Duration = Duration::from_secs(3);

/// Loads the catalog (persisted copy first, bundled default second), commits
/// edited snapshots back to local storage, and produces export snapshots.
pub struct PersistenceGateway<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
    store: SharedStore,
}

impl<S: Storage, C: ConfigProvider> PersistenceGateway<S, C> {
    pub fn new(storage: S, config: C, store: SharedStore) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
            store,
        }
    }

    /// Single-shot load. On success the store's copy is set and the catalog
    /// returned; on failure the error is logged and the store stays unset,
    /// so the presentation keeps showing its loading state. No retry.
    pub async fn load(&self) -> Option<Catalog> {
        match self.try_load().await {
            Ok(catalog) => {
                self.store.lock().await.commit(catalog.clone());
                Some(catalog)
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                None
            }
        }
    }

    async fn try_load(&self) -> Result<Catalog> {
        match self.storage.read_file(CATALOG_KEY).await {
            Ok(bytes) => {
                tracing::debug!("Loading catalog from persisted copy");
                Ok(serde_json::from_slice(&bytes)?)
            }
            Err(_) => {
                let url = self.config.default_catalog_url();
                tracing::debug!("No persisted catalog, fetching default from {}", url);
                let response = self.client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(CatalogError::LoadError {
                        message: format!(
                            "default catalog fetch returned status {}",
                            response.status()
                        ),
                    });
                }
                Ok(response.json().await?)
            }
        }
    }

    /// Serializes the snapshot and overwrites the stored document in full;
    /// there is no merge. On success the store's committed copy is replaced
    /// atomically and the status runs `Saving -> Saved -> Idle`; on failure
    /// the status becomes `Error` and the previously committed copy is left
    /// untouched.
    pub async fn save(&self, catalog: &Catalog) -> Result<()> {
        {
            let mut store = self.store.lock().await;
            if store.saving() {
                return Err(CatalogError::SaveError {
                    message: "a save is already in progress".to_string(),
                });
            }
            store.set_status(SaveStatus::Saving);
        }

        let written = self.write_catalog(catalog).await;

        let mut store = self.store.lock().await;
        match written {
            Ok(()) => {
                store.commit(catalog.clone());
                store.set_status(SaveStatus::Saved);
                drop(store);
                self.schedule_status_reset();
                tracing::info!("Catalog saved");
                Ok(())
            }
            Err(e) => {
                store.set_status(SaveStatus::Error);
                tracing::error!("Failed to save catalog: {}", e);
                Err(e)
            }
        }
    }

    async fn write_catalog(&self, catalog: &Catalog) -> Result<()> {
        let bytes = serde_json::to_vec(catalog)?;
        self.storage.write_file(CATALOG_KEY, &bytes).await
    }

    fn schedule_status_reset(&self) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            tokio::time::sleep(SAVED_RESET).await;
            let mut store = store.lock().await;
            // A save started in the meantime owns the status now.
            if store.status() == SaveStatus::Saved {
                store.set_status(SaveStatus::Idle);
            }
        });
    }

    /// Pretty-printed serialized copy for manual download. The output
    /// matches the persisted shape exactly, so it doubles as a replacement
    /// default-catalog resource.
    pub fn export_snapshot(catalog: &Catalog) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(catalog)?)
    }
}
