//! Core data models

pub mod expense;
pub mod summary;

pub use expense::Expense;
pub use summary::MonthTotal;
