//! Registered model listing

use analytics_lib::AnalyticsEngine;
use anyhow::Result;
use tabled::Tabled;

use crate::output::{color_confidence, OutputFormat};

/// Row for the model registry table
#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Accuracy")]
    accuracy: String,
    #[tabled(rename = "Last Trained")]
    last_trained: String,
    #[tabled(rename = "Features")]
    features: String,
}

/// List the registered prediction models
pub fn show(engine: &AnalyticsEngine, format: OutputFormat) -> Result<()> {
    let models = engine.models();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&models)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<ModelRow> = models
                .iter()
                .map(|m| ModelRow {
                    name: m.name.clone(),
                    kind: m.kind.to_string(),
                    accuracy: color_confidence(m.accuracy * 100.0),
                    last_trained: m.last_trained.format("%Y-%m-%d %H:%M").to_string(),
                    features: m.features.join(", "),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
