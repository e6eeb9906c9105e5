//! Custom error types for spendtrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendtrack operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV codec errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Date or amount parsing errors (caller-supplied input)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// PDF document assembly errors
    #[error("Document error: {0}")]
    Document(String),

    /// Spreadsheet export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a parse error for an invalid date argument
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::Parse(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            input.into()
        ))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for spendtrack operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
