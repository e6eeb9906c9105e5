//! Terminal display formatting
//!
//! Renders expense listings and summaries as text tables for CLI output.

pub mod expense;
pub mod summary;

pub use expense::format_expense_table;
pub use summary::{format_category_table, format_monthly_table};
