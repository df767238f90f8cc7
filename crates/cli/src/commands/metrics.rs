//! Current production metrics snapshot

use analytics_lib::AnalyticsEngine;
use anyhow::Result;
use colored::Colorize;

use crate::output::{color_risk, format_percent, OutputFormat};

/// Show the current production metrics with predictions
pub fn show(engine: &AnalyticsEngine, format: OutputFormat) -> Result<()> {
    let snapshot = engine.current_metrics();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshot)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", "Production Metrics".bold());
            println!("{}", "=".repeat(50));
            println!("As of:              {}", snapshot.timestamp.format("%Y-%m-%d %H:%M:%S"));
            println!("OEE:                {}", format_percent(snapshot.oee));
            println!("Efficiency:         {}", format_percent(snapshot.efficiency));
            println!("Quality rate:       {}", format_percent(snapshot.quality_rate));
            println!("On-time delivery:   {}", format_percent(snapshot.on_time_delivery));
            println!("Maintenance risk:   {}", color_risk(snapshot.maintenance_risk));

            if !snapshot.predicted_efficiency.is_empty() {
                println!();
                println!("{}", "Predicted Efficiency (next hours)".bold());
                println!("{}", "-".repeat(50));
                let values: Vec<String> = snapshot
                    .predicted_efficiency
                    .iter()
                    .map(|v| format!("{:.1}", v))
                    .collect();
                println!("{}", values.join("  "));
            }
        }
    }

    Ok(())
}
