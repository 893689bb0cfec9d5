//! Store management use case

use crate::error::{FlatconfError, Result};
use crate::infrastructure::ConfigStore;
use std::path::{Path, PathBuf};

/// Service for reading and editing one flat configuration file
pub struct StoreService {
    path: PathBuf,
}

impl StoreService {
    /// Create a service bound to the given configuration file
    pub fn new(path: &Path) -> Self {
        StoreService {
            path: path.to_path_buf(),
        }
    }

    /// Get a single value
    pub fn get(&self, key: &str) -> Result<String> {
        let store = ConfigStore::from_file(&self.path)?;

        store
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| FlatconfError::KeyNotFound(key.to_string()))
    }

    /// Set a value and write the file back, creating it when it does not
    /// exist yet. Only the `key=value` entries survive the rewrite, so
    /// comments and section headers in the source file are dropped.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut store = match ConfigStore::from_file(&self.path) {
            Ok(store) => store,
            Err(FlatconfError::ReadFile { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ConfigStore::new()
            }
            Err(e) => return Err(e),
        };

        *store.entry(key) = value.to_string();
        store.write_file(&self.path)?;

        Ok(())
    }

    /// List all entries in ascending key order
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let store = ConfigStore::from_file(&self.path)?;

        Ok(store
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}
