use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Filesystem-backed storage rooted at a base directory. Stands in for the
/// browser's local storage: one file per key, whole-value overwrites.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, key: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(key);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn remove_file(&self, key: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(key);
        match fs::remove_file(full_path) {
            Ok(()) => Ok(()),
            // Removing an absent key is fine, logout is unconditional.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
