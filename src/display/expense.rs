//! Expense list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.clone(),
            amount: format!("{:.2}", expense.amount),
            description: expense.description.clone(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list_message() {
        assert_eq!(format_expense_table(&[]), "No expenses found.");
    }

    #[test]
    fn test_table_contains_fields() {
        let expenses = vec![Expense::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Food",
            42.5,
            "lunch",
        )];
        let table = format_expense_table(&expenses);
        assert!(table.contains("2024-03-15"));
        assert!(table.contains("Food"));
        assert!(table.contains("42.50"));
        assert!(table.contains("lunch"));
    }
}
