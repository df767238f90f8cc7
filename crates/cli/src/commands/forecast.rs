//! Forecast commands

use analytics_lib::AnalyticsEngine;
use anyhow::Result;
use chrono::{Duration, Timelike};
use tabled::Tabled;

use crate::output::{print_table, print_warning, OutputFormat};

/// Row for the hourly efficiency forecast table
#[derive(Tabled, serde::Serialize)]
struct EfficiencyRow {
    #[tabled(rename = "Hour")]
    hour: String,
    #[tabled(rename = "Efficiency")]
    efficiency: String,
}

/// Row for the daily demand forecast table
#[derive(Tabled, serde::Serialize)]
struct DemandRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Units")]
    units: u32,
}

/// Forecast hourly efficiency for one machine
pub fn efficiency(
    engine: &AnalyticsEngine,
    machine: &str,
    hours: u32,
    format: OutputFormat,
) -> Result<()> {
    let forecast = engine.predict_efficiency(machine, hours);

    if forecast.is_empty() {
        print_warning(&format!("No history recorded for machine {}", machine));
        return Ok(());
    }

    let base = engine.reference_time();
    let rows: Vec<EfficiencyRow> = forecast
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let at = base + Duration::hours(i as i64 + 1);
            EfficiencyRow {
                hour: format!("{:02}:00", at.hour()),
                efficiency: format!("{:.2}%", value),
            }
        })
        .collect();

    print_table(&rows, format);
    Ok(())
}

/// Forecast daily demand for a product
pub fn demand(
    engine: &AnalyticsEngine,
    product: &str,
    days: u32,
    format: OutputFormat,
) -> Result<()> {
    let forecast = engine.forecast_demand(product, days);

    if forecast.is_empty() {
        print_warning("Forecast horizon is zero days");
        return Ok(());
    }

    let base = engine.reference_time();
    let rows: Vec<DemandRow> = forecast
        .iter()
        .enumerate()
        .map(|(i, units)| {
            let at = base + Duration::days(i as i64);
            DemandRow {
                day: at.format("%a %Y-%m-%d").to_string(),
                units: *units,
            }
        })
        .collect();

    print_table(&rows, format);
    Ok(())
}
