use crate::domain::model::{Catalog, SaveStatus};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Authoritative in-memory copy of the catalog plus the transient save
/// status. Unset until the first successful load; the presentation layer
/// shows a loading state while `catalog()` is `None`.
///
/// Edits never touch this copy directly: the editor works on its own
/// snapshot and the gateway replaces the committed copy atomically on save.
#[derive(Debug, Default)]
pub struct CatalogStore {
    catalog: Option<Catalog>,
    status: SaveStatus,
}

/// Shared handle; only the deferred status-reset task needs the sharing,
/// there is no concurrent-writer scenario.
pub type SharedStore = Arc<Mutex<CatalogStore>>;

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Replaces the committed copy wholesale. Partial commits do not exist.
    pub fn commit(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn set_status(&mut self, status: SaveStatus) {
        self.status = status;
    }

    /// At most one save in flight: callers gate on this before saving.
    pub fn saving(&self) -> bool {
        self.status == SaveStatus::Saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_unset_and_idle() {
        let store = CatalogStore::new();
        assert!(store.catalog().is_none());
        assert_eq!(store.status(), SaveStatus::Idle);
        assert!(!store.saving());
    }

    #[test]
    fn test_commit_replaces_whole_catalog() {
        let mut store = CatalogStore::new();
        let catalog = Catalog {
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            currency_symbol: "$".to_string(),
            location: "Kellyville".to_string(),
            phone: "0400 000 000".to_string(),
            note: "By appointment".to_string(),
            categories: vec![],
        };
        store.commit(catalog.clone());
        assert_eq!(store.catalog(), Some(&catalog));

        let mut replacement = catalog;
        replacement.note = "Limited spots".to_string();
        store.commit(replacement.clone());
        assert_eq!(store.catalog(), Some(&replacement));
    }
}
