//! Synthetic telemetry history
//!
//! Populates the trailing hourly history for a machine at engine
//! construction and answers windowed lookback queries. The dataset is
//! write-once: nothing mutates or deletes samples after generation.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use tracing::debug;

use crate::models::{MachineMetrics, TimeSeriesSample};
use crate::noise::NoiseSource;

/// Generate one sample per hour over the trailing window, oldest first
///
/// Base efficiency is 85, boosted by 5 during the day shift (hours 6-14)
/// and reduced by 10 on weekends, with bounded noise on every metric.
/// Efficiency is clamped to [60, 100] and vibration is floored at zero.
pub fn generate_history(
    machine_id: &str,
    window_hours: u32,
    now: DateTime<Utc>,
    noise: &mut dyn NoiseSource,
) -> Vec<TimeSeriesSample> {
    let mut samples = Vec::with_capacity(window_hours as usize);

    for offset in (0..window_hours).rev() {
        let timestamp = now - Duration::hours(offset as i64);
        let hour = timestamp.hour();
        let weekday = timestamp.weekday();

        let mut base_efficiency = 85.0;
        if (6..=14).contains(&hour) {
            base_efficiency += 5.0; // day shift boost
        }
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            base_efficiency -= 10.0; // weekend reduction
        }

        let efficiency = (base_efficiency + noise.uniform(-5.0, 5.0)).clamp(60.0, 100.0);
        let temperature = 35.0 + (efficiency / 100.0) * 15.0 + noise.uniform(-2.5, 2.5);
        let vibration = (2.0 - (efficiency / 100.0) * 1.5 + noise.uniform(-0.25, 0.25)).max(0.0);
        let output = (efficiency * 1.5 + noise.uniform(-10.0, 10.0)).floor();
        let pressure = 45.0 + noise.uniform(-5.0, 5.0);
        let speed = 1800.0 + noise.uniform(-100.0, 100.0);

        samples.push(TimeSeriesSample {
            timestamp,
            machine_id: machine_id.to_string(),
            metrics: MachineMetrics {
                efficiency,
                temperature,
                vibration,
                output,
                pressure,
                speed,
            },
        });
    }

    debug!(
        machine_id,
        samples = samples.len(),
        "Generated synthetic history"
    );
    samples
}

/// Write-once store of generated samples, chronological order
pub struct SampleHistory {
    samples: Vec<TimeSeriesSample>,
}

impl SampleHistory {
    pub fn new(samples: Vec<TimeSeriesSample>) -> Self {
        Self { samples }
    }

    /// Samples for a machine inside the trailing `hours` window, oldest first
    ///
    /// The cutoff is exclusive: at hourly cadence an `hours` window holds
    /// exactly `hours` samples, the sample sitting on the boundary instant
    /// falls outside it. Unknown machine identifiers yield an empty slice
    /// rather than an error.
    pub fn recent(&self, machine_id: &str, hours: u32, now: DateTime<Utc>) -> Vec<&TimeSeriesSample> {
        let cutoff = now - Duration::hours(hours as i64);
        self.samples
            .iter()
            .filter(|s| s.machine_id == machine_id && s.timestamp > cutoff)
            .collect()
    }

    /// Efficiency series for a machine inside the trailing window
    pub fn recent_efficiency(&self, machine_id: &str, hours: u32, now: DateTime<Utc>) -> Vec<f64> {
        self.recent(machine_id, hours, now)
            .iter()
            .map(|s| s.metrics.efficiency)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{SystemNoise, ZeroNoise};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        // A Wednesday at 10:00 UTC
        Utc.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_history_length_and_order() {
        let mut noise = SystemNoise::seeded(1);
        let samples = generate_history("CNC-001", 168, fixed_now(), &mut noise);
        assert_eq!(samples.len(), 168);
        for pair in samples.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        assert_eq!(samples.last().unwrap().timestamp, fixed_now());
    }

    #[test]
    fn test_sample_invariants() {
        let mut noise = SystemNoise::seeded(2);
        let samples = generate_history("CNC-001", 168, fixed_now(), &mut noise);
        for s in &samples {
            assert!((60.0..=100.0).contains(&s.metrics.efficiency));
            assert!(s.metrics.vibration >= 0.0);
            assert_eq!(s.metrics.output, s.metrics.output.floor());
        }
    }

    #[test]
    fn test_day_shift_and_weekend_offsets() {
        // Without noise the generator reduces to the base formula
        let mut noise = ZeroNoise;
        let samples = generate_history("CNC-001", 168, fixed_now(), &mut noise);
        for s in &samples {
            let hour = s.timestamp.hour();
            let weekend = matches!(s.timestamp.weekday(), Weekday::Sat | Weekday::Sun);
            let mut expected = 85.0;
            if (6..=14).contains(&hour) {
                expected += 5.0;
            }
            if weekend {
                expected -= 10.0;
            }
            assert_eq!(s.metrics.efficiency, expected);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = SystemNoise::seeded(9);
        let mut b = SystemNoise::seeded(9);
        let first = generate_history("CNC-001", 48, fixed_now(), &mut a);
        let second = generate_history("CNC-001", 48, fixed_now(), &mut b);
        for (x, y) in first.iter().zip(&second) {
            assert_eq!(x.metrics.efficiency, y.metrics.efficiency);
            assert_eq!(x.metrics.speed, y.metrics.speed);
        }
    }

    #[test]
    fn test_recent_window_filtering() {
        let mut noise = SystemNoise::seeded(3);
        let history = SampleHistory::new(generate_history("CNC-001", 168, fixed_now(), &mut noise));

        let last_two_days = history.recent("CNC-001", 48, fixed_now());
        assert_eq!(last_two_days.len(), 48);
        // Exclusive cutoff: the oldest returned sample is one hour inside
        // the window, not on its boundary
        assert_eq!(
            last_two_days[0].timestamp,
            fixed_now() - Duration::hours(47)
        );

        let unknown = history.recent("MIL-009", 48, fixed_now());
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_recent_efficiency_matches_samples() {
        let mut noise = SystemNoise::seeded(4);
        let history = SampleHistory::new(generate_history("CNC-001", 72, fixed_now(), &mut noise));
        let series = history.recent_efficiency("CNC-001", 24, fixed_now());
        let samples = history.recent("CNC-001", 24, fixed_now());
        assert_eq!(series.len(), samples.len());
        assert_eq!(series.last(), samples.last().map(|s| &s.metrics.efficiency));
    }
}
