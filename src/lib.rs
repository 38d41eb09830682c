//! Personal expense tracker
//!
//! This library implements the core of a single-user expense tracker:
//! validated CRUD over a JSON-file record store, pure aggregation and
//! filter engines, and a template-driven export pipeline with simulated
//! cloud destinations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, history, shares)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer and the filter/sort engine
//! - `reports`: Aggregation engine (category totals, time series)
//! - `export`: Templates, serializers, and export execution
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::TrackerPaths;
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
