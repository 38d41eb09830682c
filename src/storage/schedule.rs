//! Schedule config repository for JSON storage
//!
//! Holds at most one ScheduleConfig; the file is absent (or null) when
//! nothing is scheduled.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::ScheduleConfig;

use super::file_io::{read_json, write_json_atomic};

/// Repository for schedule persistence
pub struct ScheduleRepository {
    path: PathBuf,
    data: RwLock<Option<ScheduleConfig>>,
}

impl ScheduleRepository {
    /// Create a new schedule repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the schedule from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let config: Option<ScheduleConfig> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = config;
        Ok(())
    }

    /// Save the schedule to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the current schedule, if any
    pub fn get(&self) -> Result<Option<ScheduleConfig>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the schedule
    pub fn set(&self, config: ScheduleConfig) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = Some(config);
        Ok(())
    }

    /// Remove the schedule
    pub fn clear(&self) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = None;
        Ok(())
    }
}
