//! Core data models for the analytics engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-sample machine telemetry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MachineMetrics {
    /// Efficiency percentage, clamped to [60, 100]
    pub efficiency: f64,
    /// Spindle temperature in degrees Celsius
    pub temperature: f64,
    /// Vibration amplitude, never negative
    pub vibration: f64,
    /// Parts produced during the sample hour
    pub output: f64,
    /// Hydraulic pressure in bar
    pub pressure: f64,
    /// Spindle speed in RPM
    pub speed: f64,
}

/// One hourly telemetry sample, immutable once generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesSample {
    pub timestamp: DateTime<Utc>,
    pub machine_id: String,
    pub metrics: MachineMetrics,
}

/// Prediction model family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Regression,
    Classification,
    TimeSeries,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Regression => write!(f, "regression"),
            ModelKind::Classification => write!(f, "classification"),
            ModelKind::TimeSeries => write!(f, "time_series"),
        }
    }
}

/// Static metadata for a registered prediction model
///
/// The accuracy is only used as a confidence multiplier in reports; no
/// training happens anywhere in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub kind: ModelKind,
    /// Labeled accuracy in [0, 1]
    pub accuracy: f64,
    pub last_trained: DateTime<Utc>,
    pub features: Vec<String>,
}

/// Current production metrics with predictions, recomputed on every query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSnapshot {
    pub oee: f64,
    pub efficiency: f64,
    pub quality_rate: f64,
    pub on_time_delivery: f64,
    pub predicted_efficiency: Vec<f64>,
    pub maintenance_risk: f64,
    pub timestamp: DateTime<Utc>,
}

/// Predicted maintenance outlook for one machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePrediction {
    /// Failure probability in [0, 100]
    pub probability: f64,
    /// Days until the predicted failure window opens, at least 1
    pub days_until: u32,
    /// Reporting confidence in [0, 100]
    pub confidence: f64,
}

impl MaintenancePrediction {
    /// Neutral default returned when a machine has no recorded history
    pub fn no_data() -> Self {
        Self {
            probability: 0.0,
            days_until: 30,
            confidence: 0.0,
        }
    }
}

/// Material grade fed into the quality predictor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialGrade {
    #[default]
    A,
    B,
    C,
}

impl MaterialGrade {
    /// Quality score penalty for the grade
    pub fn penalty(self) -> f64 {
        match self {
            MaterialGrade::A => 0.0,
            MaterialGrade::B => -5.0,
            MaterialGrade::C => -12.0,
        }
    }
}

impl std::fmt::Display for MaterialGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialGrade::A => write!(f, "A"),
            MaterialGrade::B => write!(f, "B"),
            MaterialGrade::C => write!(f, "C"),
        }
    }
}

/// Process parameters driving a quality prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityParams {
    pub temperature: f64,
    pub pressure: f64,
    #[serde(default)]
    pub material_grade: MaterialGrade,
    #[serde(default = "default_operator_experience")]
    pub operator_experience: f64,
}

fn default_operator_experience() -> f64 {
    5.0
}

impl QualityParams {
    pub fn new(temperature: f64, pressure: f64) -> Self {
        Self {
            temperature,
            pressure,
            material_grade: MaterialGrade::default(),
            operator_experience: default_operator_experience(),
        }
    }
}

/// Predicted quality outcome for a set of process parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityPrediction {
    /// Quality score in [60, 100], rounded to 2 decimals
    pub quality_score: f64,
    /// Always 100 - quality_score
    pub defect_probability: f64,
    /// Reporting confidence in [0, 100]
    pub confidence: f64,
    /// Echo of the parameters the prediction was computed from
    pub factors: QualityParams,
}

/// Insight categories, in emission priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Optimization,
    Maintenance,
    Quality,
    Demand,
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightKind::Optimization => write!(f, "optimization"),
            InsightKind::Maintenance => write!(f, "maintenance"),
            InsightKind::Quality => write!(f, "quality"),
            InsightKind::Demand => write!(f, "demand"),
        }
    }
}

/// Business impact label attached to an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Low => write!(f, "Low"),
            Impact::Medium => write!(f, "Medium"),
            Impact::High => write!(f, "High"),
            Impact::Critical => write!(f, "Critical"),
        }
    }
}

/// Advisory message surfaced when a derived metric crosses a threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub id: u32,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    /// Confidence in [0, 100], sourced from the underlying predictor
    pub confidence: f64,
    /// Icon reference for the presentation layer
    pub icon: String,
}

/// Derived machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineState {
    Running,
    Idle,
    Maintenance,
    Error,
}

impl std::fmt::Display for MachineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineState::Running => write!(f, "running"),
            MachineState::Idle => write!(f, "idle"),
            MachineState::Maintenance => write!(f, "maintenance"),
            MachineState::Error => write!(f, "error"),
        }
    }
}

/// Coarse vibration classification derived from maintenance risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VibrationLevel {
    Normal,
    High,
    Critical,
}

impl VibrationLevel {
    /// Classify by maintenance failure probability
    pub fn from_probability(probability: f64) -> Self {
        if probability > 70.0 {
            VibrationLevel::Critical
        } else if probability > 40.0 {
            VibrationLevel::High
        } else {
            VibrationLevel::Normal
        }
    }
}

impl std::fmt::Display for VibrationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VibrationLevel::Normal => write!(f, "Normal"),
            VibrationLevel::High => write!(f, "High"),
            VibrationLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Roster entry combining live telemetry with prediction-derived status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineStatus {
    pub id: String,
    pub name: String,
    pub state: MachineState,
    /// Predicted utilization percentage, rounded
    pub utilization: u32,
    pub temperature: f64,
    pub vibration: VibrationLevel,
    /// Maintenance failure probability in [0, 100]
    pub maintenance_risk: f64,
    /// Days until the predicted failure window opens
    pub predicted_failure_days: u32,
}
