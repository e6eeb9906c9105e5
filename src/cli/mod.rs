//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage and service layers.

pub mod expense;
pub mod report;

pub use expense::{handle_add, handle_list, handle_search};
pub use report::{handle_config, handle_export, handle_predict, handle_report, handle_summary};
