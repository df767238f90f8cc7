//! Integration tests over the public engine API

use analytics_lib::engine::AnalyticsEngine;
use analytics_lib::noise::{SystemNoise, ZeroNoise};
use analytics_lib::{
    EngineConfig, InsightKind, MachineState, MaintenancePrediction, NoiseSource, QualityParams,
    VibrationLevel,
};
use chrono::{TimeZone, Utc};

/// A Wednesday at 10:00 UTC
fn fixed_now() -> chrono::DateTime<chrono::Utc> {
    Utc.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap()
}

fn seeded_engine(seed: u64) -> AnalyticsEngine {
    AnalyticsEngine::with_parts(
        EngineConfig::default(),
        fixed_now(),
        Box::new(SystemNoise::seeded(seed)),
    )
    .unwrap()
}

/// Engine with noise pinned to zero, to make trigger arithmetic exact
fn quiet_engine() -> AnalyticsEngine {
    AnalyticsEngine::with_parts(EngineConfig::default(), fixed_now(), Box::new(ZeroNoise)).unwrap()
}

fn engine_with_noise(noise: Box<dyn NoiseSource>) -> AnalyticsEngine {
    AnalyticsEngine::with_parts(EngineConfig::default(), fixed_now(), noise).unwrap()
}

/// Draws grow by a fixed step on every call, imprinting a rising trend on
/// every generated metric
struct RampNoise {
    step: f64,
    value: f64,
}

impl NoiseSource for RampNoise {
    fn uniform(&mut self, _lo: f64, _hi: f64) -> f64 {
        self.value += self.step;
        self.value
    }
}

/// Every draw returns the same value, pinning metrics against one bound
struct ConstantNoise(f64);

impl NoiseSource for ConstantNoise {
    fn uniform(&mut self, _lo: f64, _hi: f64) -> f64 {
        self.0
    }
}

#[test]
fn efficiency_forecast_honors_horizon_and_bounds() {
    let engine = seeded_engine(1);

    assert!(engine.predict_efficiency("CNC-001", 0).is_empty());

    let forecast = engine.predict_efficiency("CNC-001", 24);
    assert_eq!(forecast.len(), 24);
    for value in &forecast {
        assert!((60.0..=100.0).contains(value), "value {} out of band", value);
    }
}

#[test]
fn demand_forecast_has_exact_length() {
    let engine = seeded_engine(2);
    assert!(engine.forecast_demand("hydraulic_cylinders", 0).is_empty());
    assert_eq!(engine.forecast_demand("hydraulic_cylinders", 30).len(), 30);
}

#[test]
fn machine_without_history_returns_documented_defaults() {
    let engine = seeded_engine(3);

    // Rostered but never generated: only the reference machine has history
    assert_eq!(
        engine.predict_maintenance("WLD-001"),
        MaintenancePrediction::no_data()
    );
    assert!(engine.predict_efficiency("WLD-001", 24).is_empty());

    // Entirely unknown identifier behaves the same, no error
    assert_eq!(
        engine.predict_maintenance("MIL-009"),
        MaintenancePrediction::no_data()
    );
}

#[test]
fn quality_prediction_is_exact_complement() {
    let engine = seeded_engine(4);
    for _ in 0..50 {
        let p = engine.predict_quality(QualityParams::new(42.0, 50.0));
        assert!((60.0..=100.0).contains(&p.quality_score));
        let sum = p.quality_score + p.defect_probability;
        assert!((sum - 100.0).abs() < 1e-9, "sum {}", sum);
    }
}

#[test]
fn current_metrics_snapshot_shape() {
    let engine = seeded_engine(5);
    let snapshot = engine.current_metrics();

    assert_eq!(snapshot.oee, snapshot.efficiency);
    assert!((60.0..=100.0).contains(&snapshot.efficiency));
    assert_eq!(snapshot.predicted_efficiency.len(), 8);
    assert!(snapshot.quality_rate > 96.7 && snapshot.quality_rate <= 98.7);
    assert!(snapshot.on_time_delivery >= 94.2 && snapshot.on_time_delivery < 97.2);
    assert!((0.0..=100.0).contains(&snapshot.maintenance_risk));
    assert_eq!(snapshot.timestamp, fixed_now());
}

#[test]
fn machine_status_covers_roster() {
    let engine = seeded_engine(6);
    let statuses = engine.machine_status();
    assert_eq!(statuses.len(), 6);

    for status in &statuses {
        assert!((35.0..50.0).contains(&status.temperature));
        assert!((0.0..=100.0).contains(&status.maintenance_risk));
        assert!(status.predicted_failure_days >= 1);
    }

    // Machines without history fall back to the neutral profile
    let idle = statuses.iter().find(|s| s.id == "WLD-002").unwrap();
    assert_eq!(idle.state, MachineState::Running);
    assert_eq!(idle.utilization, 85);
    assert_eq!(idle.maintenance_risk, 0.0);
    assert_eq!(idle.vibration, VibrationLevel::Normal);
    assert_eq!(idle.predicted_failure_days, 30);
    assert_eq!(idle.name, "WLD Machine 002");
}

#[test]
fn slow_degradation_drives_maintenance_state() {
    // Each sample consumes six draws, so a 0.05 step adds 0.3 per hour to
    // every metric. That saturates the vibration score while keeping the
    // temperature score small, landing probability between 60 and 80.
    let engine = engine_with_noise(Box::new(RampNoise {
        step: 0.05,
        value: 0.0,
    }));
    let statuses = engine.machine_status();
    let reference = statuses.iter().find(|s| s.id == "CNC-001").unwrap();

    assert_eq!(reference.state, MachineState::Maintenance);
    assert!(
        reference.maintenance_risk > 60.0 && reference.maintenance_risk <= 80.0,
        "risk {} outside the maintenance band",
        reference.maintenance_risk
    );
    assert_eq!(reference.vibration, VibrationLevel::High);
}

#[test]
fn runaway_trends_drive_error_state() {
    // A steep ramp saturates both trend scores, so probability hits 100
    let engine = engine_with_noise(Box::new(RampNoise {
        step: 2.0,
        value: 0.0,
    }));
    let statuses = engine.machine_status();
    let reference = statuses.iter().find(|s| s.id == "CNC-001").unwrap();

    assert_eq!(reference.state, MachineState::Error);
    assert!(reference.maintenance_risk > 80.0);
    assert_eq!(reference.vibration, VibrationLevel::Critical);
    assert_eq!(reference.predicted_failure_days, 1);
}

#[test]
fn depressed_forecast_drives_idle_state() {
    // A large constant negative draw clamps history to the 60 floor and
    // drags the next-hour forecast below the 70 idle threshold, while the
    // flat series keeps maintenance probability at zero
    let engine = engine_with_noise(Box::new(ConstantNoise(-30.0)));
    let statuses = engine.machine_status();
    let reference = statuses.iter().find(|s| s.id == "CNC-001").unwrap();

    assert_eq!(reference.state, MachineState::Idle);
    assert_eq!(reference.utilization, 60);
    assert_eq!(reference.maintenance_risk, 0.0);
}

#[test]
fn insights_match_their_trigger_conditions() {
    // Zero noise makes every trigger computation exact and repeatable
    let engine = quiet_engine();
    let insights = engine.generate_insights();

    let forecast = engine.predict_efficiency(engine.config().reference_machine.as_str(), 24);
    let avg_efficiency = forecast.iter().sum::<f64>() / forecast.len() as f64;
    let has_optimization = insights
        .iter()
        .any(|i| i.kind == InsightKind::Optimization);
    assert_eq!(has_optimization, avg_efficiency < 85.0);

    // The watch machine has no history, so probability is 0 and the
    // maintenance insight must not fire
    assert!(!insights.iter().any(|i| i.kind == InsightKind::Maintenance));

    // Reference parameters (48, 52) are in range: defect probability is 3
    assert!(!insights.iter().any(|i| i.kind == InsightKind::Quality));

    // Mean weekly demand with zero noise stays below the surge threshold
    let demand = engine.forecast_demand("hydraulic_cylinders", 7);
    let avg_demand = demand.iter().map(|v| *v as f64).sum::<f64>() / demand.len() as f64;
    let has_demand = insights.iter().any(|i| i.kind == InsightKind::Demand);
    assert_eq!(has_demand, avg_demand > 120.0);
}

#[test]
fn insights_are_emitted_in_priority_order() {
    let engine = seeded_engine(7);
    let insights = engine.generate_insights();
    for pair in insights.windows(2) {
        assert!(pair[0].id < pair[1].id, "insights out of priority order");
    }
}

#[test]
fn identical_seeds_give_identical_results() {
    let a = seeded_engine(99);
    let b = seeded_engine(99);

    assert_eq!(
        a.predict_efficiency("CNC-001", 24),
        b.predict_efficiency("CNC-001", 24)
    );
    assert_eq!(
        a.forecast_demand("hydraulic_cylinders", 7),
        b.forecast_demand("hydraulic_cylinders", 7)
    );

    let qa = a.predict_quality(QualityParams::new(48.0, 52.0));
    let qb = b.predict_quality(QualityParams::new(48.0, 52.0));
    assert_eq!(qa.quality_score, qb.quality_score);

    let ia = a.generate_insights();
    let ib = b.generate_insights();
    assert_eq!(ia.len(), ib.len());
    for (x, y) in ia.iter().zip(&ib) {
        assert_eq!(x.kind, y.kind);
        assert_eq!(x.description, y.description);
    }
}

#[test]
fn maintenance_confidence_comes_from_model_accuracy() {
    let engine = seeded_engine(8);
    let prediction = engine.predict_maintenance("CNC-001");
    assert!((prediction.confidence - 94.0).abs() < 1e-9);
    assert!(prediction.days_until >= 1);
}

#[test]
fn custom_roster_is_honored() {
    let config = EngineConfig {
        reference_machine: "GRD-001".to_string(),
        watch_machine: "GRD-002".to_string(),
        machines: vec!["GRD-001".to_string(), "GRD-002".to_string()],
        ..Default::default()
    };
    let engine =
        AnalyticsEngine::with_parts(config, fixed_now(), Box::new(SystemNoise::seeded(10)))
            .unwrap();

    let statuses = engine.machine_status();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].id, "GRD-001");
    assert!(!engine.predict_efficiency("GRD-001", 4).is_empty());
}
