//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and lenient reads. Each
//! logical collection persists to its own file; a malformed file is
//! indistinguishable from an absent one.

pub mod connections;
pub mod expenses;
pub mod file_io;
pub mod history;
pub mod schedule;
pub mod shares;

pub use connections::ConnectionRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use history::{HistoryRepository, HISTORY_CAP};
pub use schedule::ScheduleRepository;
pub use shares::{ShareRepository, SHARE_CAP};

use crate::config::paths::TrackerPaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub history: HistoryRepository,
    pub schedule: ScheduleRepository,
    pub connections: ConnectionRepository,
    pub shares: ShareRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, ExpenseError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            history: HistoryRepository::new(paths.history_file()),
            schedule: ScheduleRepository::new(paths.schedule_file()),
            connections: ConnectionRepository::new(paths.connections_file()),
            shares: ShareRepository::new(paths.shares_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.history.load()?;
        self.schedule.load()?;
        self.connections.load()?;
        self.shares.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save()?;
        self.history.save()?;
        self.schedule.save()?;
        self.connections.save()?;
        self.shares.save()?;
        Ok(())
    }
}
