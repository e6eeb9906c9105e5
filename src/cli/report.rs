//! Summary, forecast and report commands

use crate::config::Paths;
use crate::display::{format_category_table, format_monthly_table};
use crate::error::ExpenseResult;
use crate::reports::ReportCompiler;
use crate::services::{aggregate, forecast};
use crate::storage::ExpenseStore;

/// Print the monthly (default) or category totals
pub fn handle_summary(store: &ExpenseStore, by_category: bool) -> ExpenseResult<()> {
    let expenses = store.read_all()?;
    if by_category {
        let summary = aggregate::category_summary(&expenses);
        println!("{}", format_category_table(&summary));
    } else {
        let summary = aggregate::monthly_summary(&expenses);
        println!("{}", format_monthly_table(&summary));
    }
    Ok(())
}

/// Print the next-month trend projection
pub fn handle_predict(store: &ExpenseStore) -> ExpenseResult<()> {
    let expenses = store.read_all()?;
    let summary = aggregate::monthly_summary(&expenses);
    match forecast::predict_next_month(&summary) {
        Some(projection) => {
            println!("Predicted spending for next month: {:.2}", projection);
        }
        None => {
            println!("Need at least 2 months of data for prediction.");
        }
    }
    Ok(())
}

/// Export the monthly summary spreadsheet
pub fn handle_export(store: &ExpenseStore, paths: &Paths) -> ExpenseResult<()> {
    let compiler = ReportCompiler::new(store, paths);
    match compiler.export_spreadsheet()? {
        Some(path) => println!("Exported monthly summary to {}", path.display()),
        None => println!("No data to export."),
    }
    Ok(())
}

/// Generate the full artifact set: charts, spreadsheet and the PDF report
pub fn handle_report(store: &ExpenseStore, paths: &Paths) -> ExpenseResult<()> {
    let compiler = ReportCompiler::new(store, paths);
    let artifacts = compiler.compile()?;

    for (name, path) in [
        ("Trend chart", &artifacts.trend_chart),
        ("Category chart", &artifacts.category_chart),
        ("Monthly bar chart", &artifacts.monthly_bar_chart),
        ("Top expenses chart", &artifacts.top_expenses_chart),
        ("Spreadsheet", &artifacts.spreadsheet),
    ] {
        match path {
            Some(path) => println!("{}: {}", name, path.display()),
            None => println!("{}: skipped (no data)", name),
        }
    }
    println!(
        "Report: {} ({} pages)",
        artifacts.pdf.display(),
        artifacts.pdf_pages
    );
    Ok(())
}

/// Show the resolved paths
pub fn handle_config(paths: &Paths) -> ExpenseResult<()> {
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Expense file:     {}", paths.expenses_file().display());
    println!("Reports dir:      {}", paths.reports_dir().display());
    println!("Project metadata: {}", paths.project_info_file().display());
    println!("Logo:             {}", paths.logo_file().display());
    Ok(())
}
