//! CSV file storage layer

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, ReadStats, CSV_HEADER};
