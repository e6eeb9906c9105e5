//! Derived summary types
//!
//! Summaries are recomputed from the store on each request and never
//! persisted.

use serde::{Deserialize, Serialize};

/// Total amount spent in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    /// Month identifier, `YYYY-MM`
    pub month: String,

    /// Summed amount for the month
    pub total: f64,
}

impl MonthTotal {
    /// Create a new month total
    pub fn new(month: impl Into<String>, total: f64) -> Self {
        Self {
            month: month.into(),
            total,
        }
    }
}
