//! Aggregation over the expense record set
//!
//! Monthly and category sums are derived on demand and never persisted.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Expense, MonthTotal};

/// Default record count for [`top_n`]
pub const DEFAULT_TOP_N: usize = 10;

/// Sum amounts per calendar month, ascending by month.
///
/// Empty input yields empty output, not an error.
pub fn monthly_summary(expenses: &[Expense]) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month_key()).or_insert(0.0) += expense.amount;
    }
    totals
        .into_iter()
        .map(|(month, total)| MonthTotal::new(month, total))
        .collect()
}

/// Sum amounts per category label. Keys are case-sensitive.
pub fn category_summary(expenses: &[Expense]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// The `n` largest expenses, descending by amount.
///
/// The sort is stable, so records with equal amounts keep their original
/// order.
pub fn top_n(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(date: &str, category: &str, amount: f64, description: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            amount,
            description,
        )
    }

    #[test]
    fn test_monthly_summary_groups_and_sorts() {
        let expenses = vec![
            expense("2024-03-10", "Food", 20.0, ""),
            expense("2024-01-05", "Rent", 900.0, ""),
            expense("2024-03-22", "Travel", 30.0, ""),
            expense("2024-02-01", "Food", 15.0, ""),
        ];

        let summary = monthly_summary(&expenses);
        let months: Vec<_> = summary.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, ["2024-01", "2024-02", "2024-03"]);
        assert_eq!(summary[2].total, 50.0);
    }

    #[test]
    fn test_monthly_totals_match_grand_total() {
        let expenses = vec![
            expense("2023-12-31", "Food", 10.25, ""),
            expense("2024-01-01", "Food", 5.75, ""),
            expense("2024-01-31", "Rent", 900.0, ""),
            expense("2024-06-15", "Travel", 42.0, ""),
        ];

        let grand: f64 = expenses.iter().map(|e| e.amount).sum();
        let summed: f64 = monthly_summary(&expenses).iter().map(|m| m.total).sum();
        assert!((grand - summed).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_summary_empty_input() {
        assert!(monthly_summary(&[]).is_empty());
    }

    #[test]
    fn test_category_summary_is_case_sensitive() {
        let expenses = vec![
            expense("2024-01-01", "Food", 10.0, ""),
            expense("2024-01-02", "food", 5.0, ""),
        ];

        let summary = category_summary(&expenses);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary["Food"], 10.0);
        assert_eq!(summary["food"], 5.0);
    }

    #[test]
    fn test_top_n_sorted_descending() {
        let expenses = vec![
            expense("2024-01-01", "A", 5.0, ""),
            expense("2024-01-02", "B", 50.0, ""),
            expense("2024-01-03", "C", 20.0, ""),
        ];

        let top = top_n(&expenses, 10);
        for pair in top.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
        assert_eq!(top[0].category, "B");
    }

    #[test]
    fn test_top_n_truncates_and_breaks_ties_by_insertion_order() {
        let expenses = vec![
            expense("2024-01-01", "first", 10.0, ""),
            expense("2024-01-02", "second", 10.0, ""),
            expense("2024-01-03", "third", 99.0, ""),
        ];

        let top = top_n(&expenses, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "third");
        assert_eq!(top[1].category, "first");
    }
}
