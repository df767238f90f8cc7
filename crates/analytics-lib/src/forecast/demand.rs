//! Demand forecasting with day-of-week seasonality

use chrono::Weekday;
use std::f64::consts::PI;

use crate::noise::NoiseSource;

/// Weekend demand multiplier (Saturday and Sunday)
const WEEKEND_FACTOR: f64 = 0.7;

/// Weekday demand multiplier (Monday through Friday)
const WEEKDAY_FACTOR: f64 = 1.1;

/// Forecast daily demand for the next `days_ahead` days
///
/// Day-of-week projection uses the 0=Sunday..6=Saturday encoding from
/// `Weekday::num_days_from_sunday`, making the weekend and weekday branches
/// mutually exclusive. A sinusoidal weekly trend and bounded multiplicative
/// noise modulate the base value; results are non-negative integers.
pub fn forecast_demand(
    base_demand: f64,
    days_ahead: u32,
    start_day: Weekday,
    noise: &mut dyn NoiseSource,
) -> Vec<u32> {
    let start = start_day.num_days_from_sunday();
    let mut forecast = Vec::with_capacity(days_ahead as usize);

    for i in 0..days_ahead {
        let day_of_week = (start + i) % 7; // 0 = Sunday .. 6 = Saturday
        let seasonal = if day_of_week == 0 || day_of_week == 6 {
            WEEKEND_FACTOR
        } else {
            WEEKDAY_FACTOR
        };

        let weekly_trend = (i as f64 / 7.0 * PI).sin() * 0.1;
        let jitter = noise.uniform(-0.1, 0.1);

        let value = (base_demand * seasonal * (1.0 + weekly_trend + jitter)).max(0.0);
        forecast.push(value.round() as u32);
    }

    forecast
}
