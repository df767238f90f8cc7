//! Small statistics helpers shared by the predictors

/// Least-squares linear regression slope against the 0-based sample index
///
/// This is the generic "trend" signal: the same closed form is applied to
/// efficiency, vibration, and temperature series. Returns 0 for fewer than
/// two samples.
pub fn linear_regression_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..values.len()).map(|i| (i as f64).powi(2)).sum();
    let denom = n * sum_x2 - sum_x.powi(2);
    if denom.abs() < f64::EPSILON {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denom
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_of_perfect_line() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((linear_regression_slope(&values) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_slope_degenerate_inputs() {
        assert_eq!(linear_regression_slope(&[]), 0.0);
        assert_eq!(linear_regression_slope(&[42.0]), 0.0);
    }

    #[test]
    fn test_slope_of_flat_series() {
        let values = vec![3.0; 10];
        assert!(linear_regression_slope(&values).abs() < 1e-9);
    }

    #[test]
    fn test_slope_of_decreasing_series() {
        let values = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((linear_regression_slope(&values) + 2.0).abs() < 0.01);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(87.4567), 87.46);
        assert_eq!(round2(87.0), 87.0);
        assert_eq!(round2(99.999), 100.0);
    }
}
