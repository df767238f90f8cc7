//! Analytics engine facade
//!
//! One engine instance is constructed by the application's composition root
//! and shared by reference; there is no global singleton. The synthetic
//! history is generated once at construction and read-only afterward, so
//! every query is a bounded synchronous computation. The only interior
//! mutability is the lock around the noise source.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::dataset::{generate_history, SampleHistory};
use crate::forecast;
use crate::insights::{
    self, DEFECT_PROBABILITY_THRESHOLD, DEMAND_SURGE_THRESHOLD,
    MAINTENANCE_PROBABILITY_THRESHOLD, OPTIMIZATION_EFFICIENCY_THRESHOLD,
};
use crate::models::{
    Insight, MachineMetrics, MachineState, MachineStatus, MaintenancePrediction, ModelDescriptor,
    ModelKind, ProductionSnapshot, QualityParams, QualityPrediction, VibrationLevel,
};
use crate::noise::{NoiseSource, SystemNoise};
use crate::stats::mean;

/// Registry key for the efficiency regression model
pub const EFFICIENCY_MODEL: &str = "efficiency_predictor";
/// Registry key for the quality classification model
pub const QUALITY_MODEL: &str = "quality_classifier";
/// Registry key for the maintenance time-series model
pub const MAINTENANCE_MODEL: &str = "maintenance_predictor";
/// Registry key for the demand time-series model
pub const DEMAND_MODEL: &str = "demand_forecaster";

/// Fixed registry order for reporting
const MODEL_KEYS: [&str; 4] = [
    EFFICIENCY_MODEL,
    QUALITY_MODEL,
    MAINTENANCE_MODEL,
    DEMAND_MODEL,
];

/// Product tracked by the demand insight
const DEMAND_INSIGHT_PRODUCT: &str = "hydraulic_cylinders";

/// Reference process parameters evaluated by the quality insight
const QUALITY_INSIGHT_TEMPERATURE: f64 = 48.0;
const QUALITY_INSIGHT_PRESSURE: f64 = 52.0;

/// In-process analytics engine over a write-once synthetic dataset
pub struct AnalyticsEngine {
    config: EngineConfig,
    models: HashMap<&'static str, ModelDescriptor>,
    history: SampleHistory,
    noise: Mutex<Box<dyn NoiseSource>>,
    /// Reference instant all windows and projections are relative to
    now: DateTime<Utc>,
}

impl AnalyticsEngine {
    /// Construct with the system clock and an entropy-seeded noise source
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, Utc::now(), Box::new(SystemNoise::new()))
    }

    /// Construct with a deterministic noise seed, for reproducible output
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_parts(config, Utc::now(), Box::new(SystemNoise::seeded(seed)))
    }

    /// Construct from explicit parts: reference instant and noise source
    pub fn with_parts(
        config: EngineConfig,
        now: DateTime<Utc>,
        mut noise: Box<dyn NoiseSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let samples = generate_history(
            &config.reference_machine,
            config.history_hours,
            now,
            noise.as_mut(),
        );
        let history = SampleHistory::new(samples);

        let engine = Self {
            models: Self::build_model_registry(now),
            config,
            history,
            noise: Mutex::new(noise),
            now,
        };

        info!(
            reference_machine = %engine.config.reference_machine,
            samples = engine.history.len(),
            "Analytics engine initialized"
        );
        Ok(engine)
    }

    /// Static model metadata; the accuracies act as confidence multipliers
    fn build_model_registry(now: DateTime<Utc>) -> HashMap<&'static str, ModelDescriptor> {
        let features = |names: &[&str]| names.iter().map(|f| f.to_string()).collect();
        let mut models = HashMap::new();

        models.insert(
            EFFICIENCY_MODEL,
            ModelDescriptor {
                name: "Efficiency Predictor".to_string(),
                kind: ModelKind::Regression,
                accuracy: 0.92,
                last_trained: now,
                features: features(&[
                    "temperature",
                    "vibration",
                    "speed",
                    "load",
                    "maintenance_hours",
                ]),
            },
        );
        models.insert(
            QUALITY_MODEL,
            ModelDescriptor {
                name: "Quality Classifier".to_string(),
                kind: ModelKind::Classification,
                accuracy: 0.87,
                last_trained: now,
                features: features(&[
                    "pressure",
                    "temperature",
                    "material_grade",
                    "operator_experience",
                ]),
            },
        );
        models.insert(
            MAINTENANCE_MODEL,
            ModelDescriptor {
                name: "Predictive Maintenance".to_string(),
                kind: ModelKind::TimeSeries,
                accuracy: 0.94,
                last_trained: now,
                features: features(&[
                    "vibration_pattern",
                    "temperature_trend",
                    "usage_hours",
                    "oil_quality",
                ]),
            },
        );
        models.insert(
            DEMAND_MODEL,
            ModelDescriptor {
                name: "Demand Forecaster".to_string(),
                kind: ModelKind::TimeSeries,
                accuracy: 0.82,
                last_trained: now,
                features: features(&[
                    "historical_orders",
                    "seasonal_patterns",
                    "market_indicators",
                ]),
            },
        );
        models
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reference instant captured at construction
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now
    }

    /// Registered models in fixed reporting order
    pub fn models(&self) -> Vec<&ModelDescriptor> {
        MODEL_KEYS
            .iter()
            .filter_map(|key| self.models.get(key))
            .collect()
    }

    fn model_accuracy(&self, key: &str) -> f64 {
        self.models.get(key).map(|m| m.accuracy).unwrap_or(0.0)
    }

    fn with_noise<T>(&self, f: impl FnOnce(&mut dyn NoiseSource) -> T) -> T {
        let mut guard = self.noise.lock().unwrap_or_else(PoisonError::into_inner);
        f(guard.as_mut())
    }

    /// Forecast hourly efficiency for a machine
    ///
    /// Unknown machines and a zero horizon yield an empty forecast.
    pub fn predict_efficiency(&self, machine_id: &str, hours_ahead: u32) -> Vec<f64> {
        let series = self.history.recent_efficiency(
            machine_id,
            self.config.efficiency_window_hours,
            self.now,
        );
        if series.is_empty() {
            debug!(machine_id, "No history for efficiency forecast");
            return Vec::new();
        }
        self.with_noise(|noise| {
            forecast::predict_efficiency(&series, hours_ahead, self.now.hour(), noise)
        })
    }

    /// Predict maintenance outlook for a machine
    ///
    /// Machines without recorded history return the neutral no-data default.
    pub fn predict_maintenance(&self, machine_id: &str) -> MaintenancePrediction {
        let samples =
            self.history
                .recent(machine_id, self.config.maintenance_window_hours, self.now);
        let vibration: Vec<f64> = samples.iter().map(|s| s.metrics.vibration).collect();
        let temperature: Vec<f64> = samples.iter().map(|s| s.metrics.temperature).collect();
        forecast::predict_maintenance(
            &vibration,
            &temperature,
            self.model_accuracy(MAINTENANCE_MODEL),
        )
    }

    /// Predict quality outcome for a set of process parameters
    pub fn predict_quality(&self, params: QualityParams) -> QualityPrediction {
        self.with_noise(|noise| {
            forecast::predict_quality(&params, self.model_accuracy(QUALITY_MODEL), noise)
        })
    }

    /// Forecast daily demand for a product
    ///
    /// Demand is modeled globally; the product identifier is carried for the
    /// caller's labeling only.
    pub fn forecast_demand(&self, product: &str, days_ahead: u32) -> Vec<u32> {
        debug!(product, days_ahead, "Forecasting demand");
        self.with_noise(|noise| {
            forecast::forecast_demand(
                self.config.base_demand,
                days_ahead,
                self.now.weekday(),
                noise,
            )
        })
    }

    /// Current production metrics for the reference machine, with predictions
    pub fn current_metrics(&self) -> ProductionSnapshot {
        let current = self
            .history
            .recent(&self.config.reference_machine, 1, self.now)
            .last()
            .map(|s| s.metrics)
            .unwrap_or(FALLBACK_METRICS);

        let predicted_efficiency = self.predict_efficiency(&self.config.reference_machine, 8);
        let maintenance = self.predict_maintenance(&self.config.reference_machine);

        let (quality_rate, on_time_delivery) = self.with_noise(|noise| {
            (98.7 - noise.uniform(0.0, 2.0), 94.2 + noise.uniform(0.0, 3.0))
        });

        ProductionSnapshot {
            oee: current.efficiency,
            efficiency: current.efficiency,
            quality_rate,
            on_time_delivery,
            predicted_efficiency,
            maintenance_risk: maintenance.probability,
            timestamp: self.now,
        }
    }

    /// Prediction-derived status for every rostered machine
    pub fn machine_status(&self) -> Vec<MachineStatus> {
        self.config
            .machines
            .iter()
            .map(|machine_id| {
                let maintenance = self.predict_maintenance(machine_id);
                let efficiency = self
                    .predict_efficiency(machine_id, 1)
                    .first()
                    .copied()
                    .unwrap_or(85.0);

                let state = if maintenance.probability > 80.0 {
                    MachineState::Error
                } else if maintenance.probability > 60.0 {
                    MachineState::Maintenance
                } else if efficiency < 70.0 {
                    MachineState::Idle
                } else {
                    MachineState::Running
                };

                let temperature = self.with_noise(|noise| 35.0 + noise.uniform(0.0, 15.0));

                MachineStatus {
                    id: machine_id.clone(),
                    name: machine_name(machine_id),
                    state,
                    utilization: efficiency.round() as u32,
                    temperature,
                    vibration: VibrationLevel::from_probability(maintenance.probability),
                    maintenance_risk: maintenance.probability,
                    predicted_failure_days: maintenance.days_until,
                }
            })
            .collect()
    }

    /// Evaluate all insight triggers in priority order
    ///
    /// Categories whose trigger condition is false are omitted.
    pub fn generate_insights(&self) -> Vec<Insight> {
        let mut insights = Vec::new();

        let efficiency_forecast = self.predict_efficiency(&self.config.reference_machine, 24);
        if !efficiency_forecast.is_empty() {
            let avg = mean(&efficiency_forecast);
            if avg < OPTIMIZATION_EFFICIENCY_THRESHOLD {
                insights.push(insights::optimization_insight(
                    avg,
                    self.model_accuracy(EFFICIENCY_MODEL) * 100.0,
                ));
            }
        }

        let maintenance = self.predict_maintenance(&self.config.watch_machine);
        if maintenance.probability > MAINTENANCE_PROBABILITY_THRESHOLD {
            insights.push(insights::maintenance_insight(
                &self.config.watch_machine,
                maintenance.probability,
                maintenance.days_until,
                maintenance.confidence,
            ));
        }

        let quality = self.predict_quality(QualityParams::new(
            QUALITY_INSIGHT_TEMPERATURE,
            QUALITY_INSIGHT_PRESSURE,
        ));
        if quality.defect_probability > DEFECT_PROBABILITY_THRESHOLD {
            insights.push(insights::quality_insight(
                quality.defect_probability,
                quality.confidence,
            ));
        }

        let demand = self.forecast_demand(DEMAND_INSIGHT_PRODUCT, 7);
        if !demand.is_empty() {
            let avg = mean(&demand.iter().map(|v| *v as f64).collect::<Vec<_>>());
            if avg > DEMAND_SURGE_THRESHOLD {
                insights.push(insights::demand_insight(
                    DEMAND_INSIGHT_PRODUCT,
                    avg,
                    self.config.base_demand,
                    self.model_accuracy(DEMAND_MODEL) * 100.0,
                ));
            }
        }

        debug!(count = insights.len(), "Generated insights");
        insights
    }
}

/// Metrics reported when the reference machine has no sample in the last hour
const FALLBACK_METRICS: MachineMetrics = MachineMetrics {
    efficiency: 87.5,
    temperature: 42.0,
    vibration: 1.2,
    output: 130.0,
    pressure: 45.0,
    speed: 1800.0,
};

/// Human-readable name from a machine identifier like "CNC-001"
fn machine_name(machine_id: &str) -> String {
    match machine_id.split_once('-') {
        Some((family, number)) => format!("{} Machine {}", family, number),
        None => machine_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_engine() -> AnalyticsEngine {
        let now = Utc.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap();
        AnalyticsEngine::with_parts(
            EngineConfig::default(),
            now,
            Box::new(SystemNoise::seeded(42)),
        )
        .unwrap()
    }

    #[test]
    fn test_model_registry_contents() {
        let engine = test_engine();
        let models = engine.models();
        assert_eq!(models.len(), 4);
        assert_eq!(models[0].name, "Efficiency Predictor");
        assert_eq!(models[0].kind, ModelKind::Regression);
        assert!((engine.model_accuracy(MAINTENANCE_MODEL) - 0.94).abs() < 1e-9);
        assert!((engine.model_accuracy(DEMAND_MODEL) - 0.82).abs() < 1e-9);
        assert_eq!(engine.model_accuracy("unknown_model"), 0.0);
    }

    #[test]
    fn test_history_covers_configured_window() {
        let engine = test_engine();
        assert_eq!(engine.history.len(), 168);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            machines: vec![],
            ..Default::default()
        };
        assert!(AnalyticsEngine::new(config).is_err());
    }

    #[test]
    fn test_machine_name_formatting() {
        assert_eq!(machine_name("CNC-001"), "CNC Machine 001");
        assert_eq!(machine_name("LAT-002"), "LAT Machine 002");
        assert_eq!(machine_name("press"), "press");
    }

    #[test]
    fn test_unknown_machine_degrades_to_defaults() {
        let engine = test_engine();
        assert!(engine.predict_efficiency("MIL-009", 24).is_empty());
        assert_eq!(
            engine.predict_maintenance("MIL-009"),
            MaintenancePrediction::no_data()
        );
    }
}
