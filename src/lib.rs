//! spendtrack - Command-line expense tracker with PDF report generation
//!
//! This library provides the core functionality for the spendtrack CLI. It
//! persists expense records to a CSV file, derives monthly and category
//! aggregates, projects a linear spending trend, and compiles a multi-page
//! PDF report with charts and a tabular appendix.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and project metadata
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, month totals)
//! - `storage`: CSV file storage layer
//! - `services`: Aggregation and forecasting
//! - `reports`: Chart rendering, spreadsheet export, PDF compilation
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendtrack::config::Paths;
//! use spendtrack::storage::ExpenseStore;
//!
//! let paths = Paths::new();
//! let store = ExpenseStore::new(paths.expenses_file());
//! store.init()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
