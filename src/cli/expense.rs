//! Expense entry and query commands

use chrono::NaiveDate;

use crate::display::format_expense_table;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Add one expense record
pub fn handle_add(
    store: &ExpenseStore,
    date: &str,
    category: &str,
    amount: f64,
    description: &str,
) -> ExpenseResult<()> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ExpenseError::invalid_date(date))?;
    if amount < 0.0 {
        return Err(ExpenseError::Parse(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }

    let expense = Expense::new(date, category, amount, description);
    store.append(&expense)?;
    println!("Added: {}", expense);
    Ok(())
}

/// List records, optionally filtered by category and/or inclusive date range
pub fn handle_list(
    store: &ExpenseStore,
    category: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    limit: Option<usize>,
) -> ExpenseResult<()> {
    let mut expenses = match (category, start, end) {
        (Some(label), Some(start), Some(end)) => {
            let label = label.to_lowercase();
            let mut in_range = store.filter_by_date_range(start, end)?;
            in_range.retain(|e| e.category.to_lowercase() == label);
            in_range
        }
        (Some(label), None, None) => store.filter_by_category(label)?,
        (None, Some(start), Some(end)) => store.filter_by_date_range(start, end)?,
        _ => store.read_all()?,
    };
    if let Some(limit) = limit {
        expenses.truncate(limit);
    }
    println!("{}", format_expense_table(&expenses));
    Ok(())
}

/// Case-insensitive substring search over every field of every row
pub fn handle_search(store: &ExpenseStore, text: &str) -> ExpenseResult<()> {
    let hits = store.search(text)?;
    println!("{}", format_expense_table(&hits));
    Ok(())
}
