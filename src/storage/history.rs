//! Export history repository for JSON storage
//!
//! Keeps the 50 most recent export runs, newest first.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::ExportHistoryEntry;

use super::file_io::{read_json, write_json_atomic};

/// Maximum number of history entries retained
pub const HISTORY_CAP: usize = 50;

/// Repository for export history persistence
pub struct HistoryRepository {
    path: PathBuf,
    data: RwLock<Vec<ExportHistoryEntry>>,
}

impl HistoryRepository {
    /// Create a new history repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load history from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let entries: Vec<ExportHistoryEntry> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = entries;
        Ok(())
    }

    /// Save history to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all entries, newest first
    pub fn get_all(&self) -> Result<Vec<ExportHistoryEntry>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Prepend an entry, truncating to the retention cap
    pub fn append(&self, entry: ExportHistoryEntry) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, entry);
        data.truncate(HISTORY_CAP);
        Ok(())
    }

    /// Remove every entry
    pub fn clear(&self) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExportStatus, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, HistoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export_history.json");
        let repo = HistoryRepository::new(path);
        (temp_dir, repo)
    }

    fn entry(n: usize) -> ExportHistoryEntry {
        ExportHistoryEntry::new(
            "download",
            format!("Template {}", n),
            n,
            Money::from_cents(n as i64 * 100),
            ExportStatus::Completed,
        )
    }

    #[test]
    fn test_append_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(entry(1)).unwrap();
        repo.append(entry(2)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].template_name, "Template 2");
        assert_eq!(all[1].template_name, "Template 1");
    }

    #[test]
    fn test_cap_at_fifty() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        for n in 0..60 {
            repo.append(entry(n)).unwrap();
        }

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), HISTORY_CAP);
        // Newest survives, oldest ten are gone
        assert_eq!(all[0].template_name, "Template 59");
        assert_eq!(all[49].template_name, "Template 10");
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(entry(1)).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(entry(1)).unwrap();
        repo.save().unwrap();

        let repo2 = HistoryRepository::new(temp_dir.path().join("export_history.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
    }
}
