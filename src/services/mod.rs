//! Business logic layer
//!
//! Services wrap the storage repositories with validation, derived
//! values, and persistence side effects. The filter engine lives here
//! too; it is pure and takes its input list explicitly.

pub mod connections;
pub mod expense;
pub mod filter;
pub mod schedule;
pub mod share;

pub use connections::{
    catalog_entry, CloudServiceInfo, ConnectionService, ServiceStatus, CLOUD_SERVICES,
};
pub use expense::ExpenseService;
pub use filter::{filter_expenses, CategoryFilter, FilterCriteria, SortKey, SortOrder};
pub use schedule::{compute_next_run, ScheduleService};
pub use share::{ShareService, SHARE_URL_BASE};
