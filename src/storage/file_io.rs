//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExpenseError;

/// Write CSV rows to a file atomically (write to temp, then rename)
///
/// The header is written first, followed by every row. This ensures that the
/// file is either completely written or not modified at all, preventing
/// corruption on crashes or power failures.
pub fn write_csv_atomic<P, R, F>(path: P, header: &[&str], rows: &[R]) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer
        .write_record(header)
        .map_err(|e| ExpenseError::Storage(format!("Failed to write header: {}", e)))?;
    for row in rows {
        writer
            .write_record(row.as_ref().iter().map(|f| f.as_ref()))
            .map_err(|e| ExpenseError::Storage(format!("Failed to write row: {}", e)))?;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;
    inner
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    inner
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![vec!["2024-01-01", "Food", "10.00", "lunch"]];
        write_csv_atomic(&path, &["date", "category", "amount", "description"], &rows).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,category,amount,description"));
        assert!(contents.contains("2024-01-01,Food,10.00,lunch"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        let rows: Vec<Vec<&str>> = Vec::new();
        write_csv_atomic(&path, &["date", "category", "amount", "description"], &rows).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        let rows: Vec<Vec<&str>> = Vec::new();
        write_csv_atomic(&path, &["a", "b"], &rows).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fields_needing_quoting_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![vec!["2024-01-01", "Food", "10.00", "comma, and\nnewline"]];
        write_csv_atomic(&path, &["date", "category", "amount", "description"], &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[3], "comma, and\nnewline");
    }
}
