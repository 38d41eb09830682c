//! Share link repository for JSON storage
//!
//! Keeps the 10 most recent share links, newest first.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{ShareLink, ShareLinkId};

use super::file_io::{read_json, write_json_atomic};

/// Maximum number of share links retained
pub const SHARE_CAP: usize = 10;

/// Repository for share link persistence
pub struct ShareRepository {
    path: PathBuf,
    data: RwLock<Vec<ShareLink>>,
}

impl ShareRepository {
    /// Create a new share repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load share links from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let links: Vec<ShareLink> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = links;
        Ok(())
    }

    /// Save share links to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all share links, newest first
    pub fn get_all(&self) -> Result<Vec<ShareLink>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Prepend a link, truncating to the retention cap
    pub fn append(&self, link: ShareLink) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, link);
        data.truncate(SHARE_CAP);
        Ok(())
    }

    /// Remove a link by id, returning whether it existed
    pub fn remove(&self, id: ShareLinkId) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|l| l.id != id);
        Ok(data.len() != before)
    }
}
