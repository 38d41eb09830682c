//! Service connection repository for JSON storage
//!
//! Persists the user's connect/disconnect toggles as a service-id -> bool
//! map. Services absent from the map fall back to catalog defaults.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;

use super::file_io::{read_json, write_json_atomic};

/// Repository for service connection toggles
pub struct ConnectionRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, bool>>,
}

impl ConnectionRepository {
    /// Create a new connection repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load toggles from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let map: HashMap<String, bool> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = map;
        Ok(())
    }

    /// Save toggles to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the stored toggle for a service, if the user ever set one
    pub fn get(&self, service_id: &str) -> Result<Option<bool>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(service_id).copied())
    }

    /// Record a toggle for a service
    pub fn set(&self, service_id: &str, connected: bool) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(service_id.to_string(), connected);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unset_service_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConnectionRepository::new(temp_dir.path().join("connections.json"));
        repo.load().unwrap();
        assert_eq!(repo.get("dropbox").unwrap(), None);
    }

    #[test]
    fn test_set_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("connections.json");

        let repo = ConnectionRepository::new(path.clone());
        repo.load().unwrap();
        repo.set("dropbox", true).unwrap();
        repo.set("email", false).unwrap();
        repo.save().unwrap();

        let repo2 = ConnectionRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get("dropbox").unwrap(), Some(true));
        assert_eq!(repo2.get("email").unwrap(), Some(false));
    }
}
