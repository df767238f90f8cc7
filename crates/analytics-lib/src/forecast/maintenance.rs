//! Maintenance prediction from vibration and temperature trends

use crate::models::MaintenancePrediction;
use crate::stats::linear_regression_slope;

/// Predict maintenance needs from windowed vibration and temperature series
///
/// Rising vibration dominates the blend (0.6 weight) over rising
/// temperature (0.4). Empty series return the neutral no-data default.
/// `accuracy` is the maintenance model's labeled accuracy in [0, 1].
pub fn predict_maintenance(
    vibration: &[f64],
    temperature: &[f64],
    accuracy: f64,
) -> MaintenancePrediction {
    if vibration.is_empty() || temperature.is_empty() {
        return MaintenancePrediction::no_data();
    }

    let vibration_trend = linear_regression_slope(vibration);
    let temperature_trend = linear_regression_slope(temperature);

    let vibration_score = (vibration_trend * 10.0).clamp(0.0, 1.0);
    let temperature_score = (temperature_trend / 10.0).clamp(0.0, 1.0);

    let probability = (vibration_score * 0.6 + temperature_score * 0.4) * 100.0;
    let days_until = ((30.0 - probability * 0.3).floor() as i64).max(1) as u32;

    MaintenancePrediction {
        probability,
        days_until,
        confidence: accuracy * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_returns_no_data_default() {
        let p = predict_maintenance(&[], &[], 0.94);
        assert_eq!(p, MaintenancePrediction::no_data());
        // One empty side is still missing data
        let p = predict_maintenance(&[1.0, 1.1], &[], 0.94);
        assert_eq!(p, MaintenancePrediction::no_data());
    }

    #[test]
    fn test_stable_machine_has_zero_probability() {
        let vibration = vec![1.2; 72];
        let temperature = vec![42.0; 72];
        let p = predict_maintenance(&vibration, &temperature, 0.94);
        assert_eq!(p.probability, 0.0);
        assert_eq!(p.days_until, 30);
        assert!((p.confidence - 94.0).abs() < 1e-9);
    }

    #[test]
    fn test_rising_trends_saturate_probability() {
        // Vibration slope 0.5/hour and temperature slope 20/hour both clamp
        // their scores to 1.0, so probability hits the 100 ceiling
        let vibration: Vec<f64> = (0..72).map(|i| i as f64 * 0.5).collect();
        let temperature: Vec<f64> = (0..72).map(|i| i as f64 * 20.0).collect();
        let p = predict_maintenance(&vibration, &temperature, 0.94);
        assert!((p.probability - 100.0).abs() < 1e-9);
        // floor(30 - 100 * 0.3) = 0, floored to the 1-day minimum
        assert_eq!(p.days_until, 1);
    }

    #[test]
    fn test_falling_trends_score_zero() {
        let vibration: Vec<f64> = (0..72).map(|i| 3.0 - i as f64 * 0.01).collect();
        let temperature: Vec<f64> = (0..72).map(|i| 50.0 - i as f64 * 0.1).collect();
        let p = predict_maintenance(&vibration, &temperature, 0.94);
        assert_eq!(p.probability, 0.0);
    }

    #[test]
    fn test_vibration_weighted_over_temperature() {
        // Saturated vibration alone: 0.6 * 100 = 60
        let vibration: Vec<f64> = (0..24).map(|i| i as f64).collect();
        let temperature = vec![42.0; 24];
        let p = predict_maintenance(&vibration, &temperature, 0.94);
        assert!((p.probability - 60.0).abs() < 1e-9);
        assert_eq!(p.days_until, 12); // floor(30 - 18)
    }
}
