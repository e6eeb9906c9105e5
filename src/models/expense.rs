//! Expense record model
//!
//! One expense entry as stored in the CSV file. Records have no identity
//! beyond their position in the file; duplicates are permitted and preserved
//! in insertion order.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date of the expense
    pub date: NaiveDate,

    /// Short category label (case preserved as entered)
    pub category: String,

    /// Amount spent; rows with unparseable amounts are coerced to zero
    pub amount: f64,

    /// Free-text description, empty when absent
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// The concatenated string form of every field.
    ///
    /// Search works over this text, not just the description, so a query can
    /// hit the date, category or amount as well. This loose full-row scan is
    /// load-bearing; do not narrow it to a description-only match.
    pub fn row_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }

    /// The month this expense falls in, as `YYYY-MM`
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}
