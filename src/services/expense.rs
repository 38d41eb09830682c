//! Expense service
//!
//! Business logic for expense CRUD: draft validation, id/timestamp
//! assignment, newest-first insertion, and save-after-mutate.

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId, ExpenseValidationError};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new expense from a form draft
    ///
    /// Assigns the id and creation timestamp, inserts at the front of the
    /// collection, and persists. The draft must pass field validation;
    /// callers wanting per-field messages should run
    /// [`ExpenseDraft::validate`] themselves first.
    pub fn add(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let validated = draft.validate().map_err(join_errors)?;

        let expense = Expense::new(
            validated.amount,
            validated.category,
            validated.description,
            validated.date,
        );
        debug!(id = %expense.id, "adding expense");

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;
        Ok(expense)
    }

    /// Update an existing expense from a form draft
    ///
    /// Everything except `id` and `created_at` is replaced.
    pub fn update(&self, id: ExpenseId, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let validated = draft.validate().map_err(join_errors)?;

        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        expense.apply(validated);

        self.storage.expenses.update(expense.clone())?;
        self.storage.expenses.save()?;
        Ok(expense)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        if !self.storage.expenses.remove(id)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }
        self.storage.expenses.save()?;
        Ok(())
    }

    /// Get a single expense
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// List all expenses in persisted order (newest first)
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }
}

/// Collapse field errors into a single validation error message
fn join_errors(errors: Vec<ExpenseValidationError>) -> ExpenseError {
    let message = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    ExpenseError::Validation(message)
}
