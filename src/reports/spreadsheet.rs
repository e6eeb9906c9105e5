//! Monthly summary spreadsheet export

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::MonthTotal;

/// Write the monthly summary to an xlsx file with `month` and `amount`
/// columns. An empty summary is a soft condition: logged, nothing written.
pub fn export_monthly_summary(
    path: &Path,
    summary: &[MonthTotal],
) -> ExpenseResult<Option<PathBuf>> {
    if summary.is_empty() {
        warn!("no data to export");
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "month").map_err(export_err)?;
    worksheet.write_string(0, 1, "amount").map_err(export_err)?;
    for (i, month) in summary.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write_string(row, 0, &month.month)
            .map_err(export_err)?;
        worksheet
            .write_number(row, 1, month.total)
            .map_err(export_err)?;
    }

    workbook.save(path).map_err(export_err)?;
    Ok(Some(path.to_path_buf()))
}

fn export_err(err: XlsxError) -> ExpenseError {
    ExpenseError::Export(err.to_string())
}
