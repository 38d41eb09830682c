//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense collection to expenses.json.
//! The persisted blob is a plain array; order is insertion order with the
//! newest record first. There is no indexing: every mutation round-trips
//! the whole collection.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing or malformed file loads as an empty collection.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!(count = expenses.len(), "loaded expenses");

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;
        Ok(())
    }

    /// Save expenses to disk (full overwrite, preserving order)
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        debug!(count = data.len(), "saving expenses");
        write_json_atomic(&self.path, &*data)
    }

    /// Get all expenses in persisted order (newest first)
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Insert a new expense at the front of the collection
    pub fn insert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, expense);
        Ok(())
    }

    /// Replace an existing expense in place, keeping its position
    pub fn update(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense;
                Ok(())
            }
            None => Err(ExpenseError::expense_not_found(expense.id.to_string())),
        }
    }

    /// Delete an expense, returning whether it existed
    pub fn remove(&self, id: ExpenseId) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() != before)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
