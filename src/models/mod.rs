//! Core data models for the expense tracker

pub mod category;
pub mod expense;
pub mod history;
pub mod ids;
pub mod money;
pub mod schedule;
pub mod share;

pub use category::Category;
pub use expense::{
    Expense, ExpenseDraft, ExpenseValidationError, ValidatedDraft, MAX_AMOUNT,
    MAX_DESCRIPTION_LEN,
};
pub use history::{ExportHistoryEntry, ExportStatus};
pub use ids::{ExpenseId, HistoryEntryId, ShareLinkId};
pub use money::{Money, MoneyParseError};
pub use schedule::{ScheduleConfig, ScheduleFrequency};
pub use share::{ShareLink, SHARE_LINK_TTL_DAYS};
