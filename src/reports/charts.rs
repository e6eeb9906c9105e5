//! Chart rendering with plotters
//!
//! Four PNG artifacts: monthly trend line, category pie, monthly bar and the
//! top-10 expenses bar. Every renderer returns `Ok(None)` when there is no
//! data to plot; the report simply omits the corresponding page.

use std::path::{Path, PathBuf};

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::{Palette, Palette99};
use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, MonthTotal};

const WIDE: (u32, u32) = (1000, 500);
const SQUARE: (u32, u32) = (800, 800);

/// Truncation length for top-expense tick labels
const LABEL_MAX_CHARS: usize = 30;

/// Monthly spending trend as a line chart with point markers
pub fn render_trend_chart(path: &Path, summary: &[MonthTotal]) -> ExpenseResult<Option<PathBuf>> {
    if summary.is_empty() {
        warn!("no data available to plot");
        return Ok(None);
    }
    draw_trend(path, summary).map_err(|e| ExpenseError::Chart(e.to_string()))?;
    Ok(Some(path.to_path_buf()))
}

fn draw_trend(path: &Path, summary: &[MonthTotal]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = (summary.len() as u32).saturating_sub(1).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Spending Trend", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(80)
        .build_cartesian_2d(0u32..x_max, 0f64..y_max(summary.iter().map(|m| m.total)))?;

    chart
        .configure_mesh()
        .x_labels(summary.len())
        .x_label_formatter(&|idx: &u32| {
            summary
                .get(*idx as usize)
                .map(|m| m.month.clone())
                .unwrap_or_default()
        })
        .x_desc("Month")
        .y_desc("Total Amount")
        .draw()?;

    chart.draw_series(LineSeries::new(
        summary.iter().enumerate().map(|(i, m)| (i as u32, m.total)),
        &BLUE,
    ))?;
    chart.draw_series(
        summary
            .iter()
            .enumerate()
            .map(|(i, m)| Circle::new((i as u32, m.total), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Category-wise spending distribution as a pie chart
pub fn render_category_pie(
    path: &Path,
    categories: &[(String, f64)],
) -> ExpenseResult<Option<PathBuf>> {
    let total: f64 = categories.iter().map(|(_, v)| *v).sum();
    if categories.is_empty() || total <= 0.0 {
        warn!("no data available for pie chart");
        return Ok(None);
    }
    draw_pie(path, categories).map_err(|e| ExpenseError::Chart(e.to_string()))?;
    Ok(Some(path.to_path_buf()))
}

fn draw_pie(path: &Path, categories: &[(String, f64)]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, SQUARE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Category-wise Spending Distribution", ("sans-serif", 30))?;

    let sizes: Vec<f64> = categories.iter().map(|(_, v)| *v).collect();
    let labels: Vec<String> = categories.iter().map(|(k, _)| k.clone()).collect();
    let colors: Vec<RGBColor> = (0..categories.len())
        .map(|i| {
            let (r, g, b) = Palette99::COLORS[i % Palette99::COLORS.len()];
            RGBColor(r, g, b)
        })
        .collect();

    let center = (400, 370);
    let radius = 260.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

/// Monthly totals as a bar chart
pub fn render_monthly_bar(path: &Path, summary: &[MonthTotal]) -> ExpenseResult<Option<PathBuf>> {
    if summary.is_empty() {
        warn!("no data available for bar chart");
        return Ok(None);
    }
    let labels: Vec<String> = summary.iter().map(|m| m.month.clone()).collect();
    let values: Vec<f64> = summary.iter().map(|m| m.total).collect();
    draw_bars(path, "Monthly Spending Bar Chart", "Month", &labels, &values)
        .map_err(|e| ExpenseError::Chart(e.to_string()))?;
    Ok(Some(path.to_path_buf()))
}

/// The highest expenses as a bar chart labelled by description
pub fn render_top_expenses(path: &Path, top: &[Expense]) -> ExpenseResult<Option<PathBuf>> {
    if top.is_empty() {
        warn!("no data available for top expenses chart");
        return Ok(None);
    }
    // Long descriptions make unusable tick labels.
    let labels: Vec<String> = top
        .iter()
        .map(|e| e.description.chars().take(LABEL_MAX_CHARS).collect())
        .collect();
    let values: Vec<f64> = top.iter().map(|e| e.amount).collect();
    draw_bars(
        path,
        "Top 10 Highest Expenses",
        "Expense Description",
        &labels,
        &values,
    )
    .map_err(|e| ExpenseError::Chart(e.to_string()))?;
    Ok(Some(path.to_path_buf()))
}

fn draw_bars(
    path: &Path,
    caption: &str,
    x_desc: &str,
    labels: &[String],
    values: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = (values.len() as u32).saturating_sub(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0u32..x_max).into_segmented(),
            0f64..y_max(values.iter().copied()),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(values.len())
        .x_label_formatter(&|seg: &SegmentValue<u32>| match seg {
            SegmentValue::CenterOf(idx) => labels
                .get(*idx as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc(x_desc)
        .y_desc("Total Amount")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.filled())
            .margin(10)
            .data(values.iter().enumerate().map(|(i, v)| (i as u32, *v))),
    )?;

    root.present()?;
    Ok(())
}

fn y_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0f64, f64::max).max(1.0) * 1.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_skip_without_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chart.png");

        assert_eq!(render_trend_chart(&path, &[]).unwrap(), None);
        assert_eq!(render_category_pie(&path, &[]).unwrap(), None);
        assert_eq!(render_monthly_bar(&path, &[]).unwrap(), None);
        assert_eq!(render_top_expenses(&path, &[]).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_zero_total_pie_is_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pie.png");

        let categories = vec![("Food".to_string(), 0.0)];
        assert_eq!(render_category_pie(&path, &categories).unwrap(), None);
    }
}
