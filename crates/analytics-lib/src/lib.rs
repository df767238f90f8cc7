//! Production analytics engine
//!
//! This crate provides the core functionality for:
//! - Synthetic telemetry history generation
//! - Trend and seasonal estimation
//! - Efficiency, maintenance, quality, and demand prediction
//! - Threshold-based insight aggregation
//!
//! All prediction here is deterministic arithmetic over the generated
//! dataset; the registered "models" are static metadata whose accuracy
//! figures only scale reported confidence.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod forecast;
pub mod insights;
pub mod models;
pub mod noise;
pub mod stats;

pub use config::{ConfigError, EngineConfig};
pub use engine::AnalyticsEngine;
pub use models::*;
pub use noise::{NoiseSource, SystemNoise};
