//! Summary table formatting

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::MonthTotal;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Month")]
    key: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the monthly summary as a table
pub fn format_monthly_table(summary: &[MonthTotal]) -> String {
    if summary.is_empty() {
        return "No data available.".to_string();
    }

    let rows: Vec<SummaryRow> = summary
        .iter()
        .map(|m| SummaryRow {
            key: m.month.clone(),
            total: format!("{:.2}", m.total),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the category summary as a table, sorted by category label
pub fn format_category_table(summary: &HashMap<String, f64>) -> String {
    if summary.is_empty() {
        return "No data available.".to_string();
    }

    let mut entries: Vec<(&String, &f64)> = summary.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let rows: Vec<CategoryRow> = entries
        .into_iter()
        .map(|(category, total)| CategoryRow {
            category: category.clone(),
            total: format!("{:.2}", total),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summaries() {
        assert_eq!(format_monthly_table(&[]), "No data available.");
        assert_eq!(format_category_table(&HashMap::new()), "No data available.");
    }

    #[test]
    fn test_category_table_sorted_by_label() {
        let mut summary = HashMap::new();
        summary.insert("Travel".to_string(), 55.0);
        summary.insert("Food".to_string(), 20.0);

        let table = format_category_table(&summary);
        let food = table.find("Food").unwrap();
        let travel = table.find("Travel").unwrap();
        assert!(food < travel);
    }
}
