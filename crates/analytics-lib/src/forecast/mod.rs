//! Forecast and prediction functions
//!
//! Pure functions over windowed telemetry series; the engine wires them to
//! the stored history and model registry. Missing data degrades to the
//! documented defaults, never an error.

mod demand;
mod efficiency;
mod maintenance;
mod quality;

pub use demand::forecast_demand;
pub use efficiency::{predict_efficiency, seasonal_factor};
pub use maintenance::predict_maintenance;
pub use quality::predict_quality;
