//! Triggered insight listing

use analytics_lib::AnalyticsEngine;
use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use crate::output::{color_confidence, color_impact, print_info, OutputFormat};

/// Row for the insights table
#[derive(Tabled)]
struct InsightRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Category")]
    kind: String,
    #[tabled(rename = "Impact")]
    impact: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Title")]
    title: String,
}

/// Show all currently triggered insights
pub fn show(engine: &AnalyticsEngine, format: OutputFormat) -> Result<()> {
    let insights = engine.generate_insights();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&insights)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if insights.is_empty() {
                print_info("No insights triggered");
                return Ok(());
            }

            let rows: Vec<InsightRow> = insights
                .iter()
                .map(|i| InsightRow {
                    id: i.id,
                    kind: i.kind.to_string(),
                    impact: color_impact(i.impact),
                    confidence: color_confidence(i.confidence),
                    title: i.title.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);

            println!();
            for insight in &insights {
                println!("{} {}", format!("[{}]", insight.id).bold(), insight.description);
            }
        }
    }

    Ok(())
}
