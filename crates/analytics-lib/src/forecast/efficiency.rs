//! Efficiency forecasting
//!
//! Autoregressive walk seeded from the most recent observation: each step
//! adds the trend of the fixed lookback window, a shift-based seasonal
//! offset, and bounded noise, then clamps back into the valid band.

use crate::noise::NoiseSource;
use crate::stats::{linear_regression_slope, round2};

/// Additive seasonal adjustment for a projected hour of day
///
/// Day shift (6-14) runs hotter, the evening shift (15-22) is neutral, and
/// overnight hours drag efficiency down.
pub fn seasonal_factor(base_hour: u32, step: u32) -> f64 {
    let hour = (base_hour as u64 + step as u64) % 24;
    if (6..=14).contains(&hour) {
        2.0
    } else if (15..=22).contains(&hour) {
        0.0
    } else {
        -3.0
    }
}

/// Forecast efficiency for each of the next `hours_ahead` hours
///
/// `history` is the chronological efficiency series of the lookback window;
/// an empty series or a zero horizon yields an empty forecast. The trend is
/// taken from the fixed window, not re-estimated from forecast values, so
/// successive steps are autoregressive on the running value only.
pub fn predict_efficiency(
    history: &[f64],
    hours_ahead: u32,
    base_hour: u32,
    noise: &mut dyn NoiseSource,
) -> Vec<f64> {
    let Some(&seed) = history.last() else {
        return Vec::new();
    };

    let trend = linear_regression_slope(history);
    let mut last_value = seed;
    let mut predictions = Vec::with_capacity(hours_ahead as usize);

    for step in 0..hours_ahead {
        let seasonal = seasonal_factor(base_hour, step);
        let jitter = noise.uniform(-1.0, 1.0);
        last_value = (last_value + trend + seasonal + jitter).clamp(60.0, 100.0);
        predictions.push(round2(last_value));
    }

    predictions
}
