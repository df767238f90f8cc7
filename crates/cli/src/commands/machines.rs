//! Machine status roster

use analytics_lib::AnalyticsEngine;
use anyhow::Result;
use tabled::Tabled;

use crate::output::{color_risk, color_state, format_temperature, OutputFormat};

/// Row for the machine status table
#[derive(Tabled)]
struct MachineRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Temp")]
    temperature: String,
    #[tabled(rename = "Vibration")]
    vibration: String,
    #[tabled(rename = "Risk")]
    maintenance_risk: String,
    #[tabled(rename = "Failure In")]
    predicted_failure: String,
}

/// Show prediction-derived status for every rostered machine
pub fn show(engine: &AnalyticsEngine, format: OutputFormat) -> Result<()> {
    let statuses = engine.machine_status();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&statuses)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<MachineRow> = statuses
                .iter()
                .map(|s| MachineRow {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    state: color_state(s.state),
                    utilization: format!("{}%", s.utilization),
                    temperature: format_temperature(s.temperature),
                    vibration: s.vibration.to_string(),
                    maintenance_risk: color_risk(s.maintenance_risk),
                    predicted_failure: format!("{}d", s.predicted_failure_days),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} machines", statuses.len());
        }
    }

    Ok(())
}
