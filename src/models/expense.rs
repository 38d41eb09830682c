//! Expense model
//!
//! Represents a single recorded spending event, plus the unvalidated form
//! draft and the field-level validation that gates every mutation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Upper bound for a single expense amount ($999,999.99)
pub const MAX_AMOUNT: Money = Money::from_cents(99_999_999);

/// Maximum description length after trimming
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A recorded spending event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: Money,

    /// Category from the fixed set
    pub category: Category,

    /// Trimmed description, 1-100 characters
    pub description: String,

    /// Calendar date of the expense, user-editable
    pub date: NaiveDate,

    /// When the record was created, immutable
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id and creation timestamp
    pub fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: description.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Replace the mutable fields from validated draft data
    ///
    /// `id` and `created_at` are never touched by an update.
    pub fn apply(&mut self, validated: ValidatedDraft) {
        self.amount = validated.amount;
        self.category = validated.category;
        self.description = validated.description;
        self.date = validated.date;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Unvalidated form input for creating or editing an expense
///
/// Amount and date arrive as strings, exactly as an entry form produces
/// them; `validate` parses both and reports every failing field at once.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: Category,
    pub description: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Validate the draft, returning parsed fields or all field errors
    pub fn validate(&self) -> Result<ValidatedDraft, Vec<ExpenseValidationError>> {
        let mut errors = Vec::new();

        let amount = match Money::parse(&self.amount) {
            Ok(m) if m.is_positive() => {
                if m > MAX_AMOUNT {
                    errors.push(ExpenseValidationError::AmountTooLarge);
                    None
                } else {
                    Some(m)
                }
            }
            _ => {
                errors.push(ExpenseValidationError::AmountNotPositive);
                None
            }
        };

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(ExpenseValidationError::DescriptionRequired);
        } else if description.len() > MAX_DESCRIPTION_LEN {
            errors.push(ExpenseValidationError::DescriptionTooLong);
        }

        let date = if self.date.trim().is_empty() {
            errors.push(ExpenseValidationError::DateRequired);
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(ExpenseValidationError::DateInvalid);
                    None
                }
            }
        };

        if errors.is_empty() {
            Ok(ValidatedDraft {
                amount: amount.unwrap_or_default(),
                category: self.category,
                description: description.to_string(),
                date: date.unwrap_or_default(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Parsed and validated draft fields, ready to become (or update) an Expense
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub amount: Money,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

/// Field-level validation errors for the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseValidationError {
    /// Amount is missing, unparseable, or not greater than zero
    AmountNotPositive,
    /// Amount exceeds the $999,999.99 cap
    AmountTooLarge,
    /// Description is empty after trimming
    DescriptionRequired,
    /// Description exceeds 100 characters after trimming
    DescriptionTooLong,
    /// Date field is empty
    DateRequired,
    /// Date is not a valid YYYY-MM-DD calendar date
    DateInvalid,
}

impl ExpenseValidationError {
    /// The form field this error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::AmountNotPositive | Self::AmountTooLarge => "amount",
            Self::DescriptionRequired | Self::DescriptionTooLong => "description",
            Self::DateRequired | Self::DateInvalid => "date",
        }
    }
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotPositive => write!(f, "Enter a valid amount greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed $999,999.99"),
            Self::DescriptionRequired => write!(f, "Description is required"),
            Self::DescriptionTooLong => {
                write!(f, "Description must be under {} characters", MAX_DESCRIPTION_LEN)
            }
            Self::DateRequired => write!(f, "Date is required"),
            Self::DateInvalid => write!(f, "Enter a valid date"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
