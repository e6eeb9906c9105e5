//! Expense store over a single CSV file
//!
//! The store keeps an ordered sequence of expense records in one CSV file
//! with the fixed header `date,category,amount,description`. Every mutation
//! rewrites the whole file (no append-only log), so each insert costs a full
//! read and write. Files are expected to stay small.
//!
//! The store is NOT safe for concurrent writers: two processes appending at
//! the same time can lose updates through the whole-file-rewrite pattern.
//! This is an accepted limitation, not a guarantee to preserve.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::write_csv_atomic;

/// Fixed column header of the storage file
pub const CSV_HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// Diagnostics collected while reading the storage file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Rows dropped because their date column did not parse
    pub rows_dropped: usize,
}

/// Persistence layer over the full expense record sequence
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given CSV file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and a header-only file if none exists.
    /// Idempotent: an existing file is left untouched.
    pub fn init(&self) -> ExpenseResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        let rows: Vec<Vec<String>> = Vec::new();
        write_csv_atomic(&self.path, &CSV_HEADER, &rows)
    }

    /// Read every record in file order.
    ///
    /// A missing file is a soft "no data" condition: logged, empty result.
    /// Rows with unparseable dates are dropped (counted in the log);
    /// unparseable amounts coerce to zero; a missing description column
    /// defaults to the empty string. A defective row never aborts the read.
    pub fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        let (records, stats) = self.read_all_with_stats()?;
        if stats.rows_dropped > 0 {
            warn!(
                "dropped {} row(s) with unparseable dates from {}",
                stats.rows_dropped,
                self.path.display()
            );
        }
        Ok(records)
    }

    /// Read every record, surfacing row-defect diagnostics to the caller
    pub fn read_all_with_stats(&self) -> ExpenseResult<(Vec<Expense>, ReadStats)> {
        if !self.path.exists() {
            warn!("expense file missing at {}", self.path.display());
            return Ok((Vec::new(), ReadStats::default()));
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut records = Vec::new();
        let mut stats = ReadStats::default();

        for row in reader.records() {
            let row = row.map_err(|e| {
                ExpenseError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

            let date = match row
                .get(0)
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            {
                Some(date) => date,
                None => {
                    debug!("dropping row with bad date: {:?}", row.get(0));
                    stats.rows_dropped += 1;
                    continue;
                }
            };

            let category = row.get(1).unwrap_or("").to_string();
            let amount = row
                .get(2)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            let description = row.get(3).unwrap_or("").to_string();

            records.push(Expense::new(date, category, amount, description));
        }

        Ok((records, stats))
    }

    /// Append one record: read the full current contents, add one row, and
    /// rewrite the file atomically.
    ///
    /// Raw rows are carried over as-is so that rows a read would drop (bad
    /// dates) are not destroyed by an unrelated append.
    pub fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        let mut rows = self.read_raw_rows()?;
        rows.push(vec![
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            format!("{}", expense.amount),
            expense.description.clone(),
        ]);
        write_csv_atomic(&self.path, &CSV_HEADER, &rows)
    }

    /// Records whose category matches the label, case-insensitively
    pub fn filter_by_category(&self, label: &str) -> ExpenseResult<Vec<Expense>> {
        let needle = label.to_lowercase();
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.category.to_lowercase() == needle)
            .collect())
    }

    /// Records dated within `[start, end]`, bounds inclusive.
    ///
    /// Invalid date strings are a caller error and propagate as a parse
    /// failure rather than being swallowed.
    pub fn filter_by_date_range(&self, start: &str, end: &str) -> ExpenseResult<Vec<Expense>> {
        let start = parse_date_arg(start)?;
        let end = parse_date_arg(end)?;
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    /// Case-insensitive substring match over the full row text of every
    /// record (see [`Expense::row_text`]) — a grep over the whole table.
    pub fn search(&self, text: &str) -> ExpenseResult<Vec<Expense>> {
        let needle = text.to_lowercase();
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.row_text().to_lowercase().contains(&needle))
            .collect())
    }

    /// Raw string rows of the current file, header excluded. Missing file
    /// yields no rows.
    fn read_raw_rows(&self) -> ExpenseResult<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| {
                ExpenseError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
            })?;
            let mut fields: Vec<String> = row.iter().map(|f| f.to_string()).collect();
            // Normalize short rows so the rewrite keeps the fixed width.
            while fields.len() < CSV_HEADER.len() {
                fields.push(String::new());
            }
            rows.push(fields);
        }
        Ok(rows)
    }
}

fn parse_date_arg(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ExpenseError::invalid_date(input))
}
