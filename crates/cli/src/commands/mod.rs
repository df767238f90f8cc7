//! CLI command implementations

pub mod forecast;
pub mod insights;
pub mod machines;
pub mod metrics;
pub mod models;
pub mod predict;
