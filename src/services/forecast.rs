//! Linear trend projection over monthly totals
//!
//! Fits an ordinary least-squares line over `(index, total)` pairs and
//! evaluates it one step past the known months. Deterministic: identical
//! summaries always produce identical projections.

use tracing::warn;

use crate::models::MonthTotal;

/// Project the next month's total from the monthly summary.
///
/// Requires at least two monthly points; otherwise fails soft (logged,
/// `None`). The result is rounded to two decimal places.
pub fn predict_next_month(summary: &[MonthTotal]) -> Option<f64> {
    if summary.len() < 2 {
        warn!(
            "need at least 2 months of data for prediction, have {}",
            summary.len()
        );
        return None;
    }

    let k = summary.len();
    let n = k as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, point) in summary.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += point.total;
        sum_xy += x * point.total;
        sum_xx += x * x;
    }

    // Closed-form OLS; the denominator is positive for k >= 2 distinct indices.
    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    let projected = slope * k as f64 + intercept;
    Some((projected * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(totals: &[f64]) -> Vec<MonthTotal> {
        totals
            .iter()
            .enumerate()
            .map(|(i, &t)| MonthTotal::new(format!("2024-{:02}", i + 1), t))
            .collect()
    }

    #[test]
    fn test_perfectly_linear_series() {
        let projection = predict_next_month(&summary(&[100.0, 200.0, 300.0])).unwrap();
        assert!((projection - 400.0).abs() < 0.01);
    }

    #[test]
    fn test_flat_series_projects_same_value() {
        let projection = predict_next_month(&summary(&[250.0, 250.0, 250.0, 250.0])).unwrap();
        assert!((projection - 250.0).abs() < 0.01);
    }

    #[test]
    fn test_two_points_is_enough() {
        let projection = predict_next_month(&summary(&[10.0, 20.0])).unwrap();
        assert!((projection - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_fewer_than_two_points_fails_soft() {
        assert_eq!(predict_next_month(&[]), None);
        assert_eq!(predict_next_month(&summary(&[123.0])), None);
    }

    #[test]
    fn test_result_rounded_to_two_decimals() {
        // OLS over [0, 0, 1]: slope 0.5, intercept -1/6, projection 1.333... -> 1.33
        let projection = predict_next_month(&summary(&[0.0, 0.0, 1.0])).unwrap();
        assert_eq!(projection, 1.33);
    }

    #[test]
    fn test_deterministic() {
        let points = summary(&[120.5, 80.25, 310.0, 95.75]);
        assert_eq!(predict_next_month(&points), predict_next_month(&points));
    }
}
