//! Output formatting utilities

use analytics_lib::{Impact, MachineState};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a percentage with one decimal
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a temperature in degrees Celsius
pub fn format_temperature(value: f64) -> String {
    format!("{:.1}°C", value)
}

/// Color a machine state by severity
pub fn color_state(state: MachineState) -> String {
    let label = state.to_string();
    match state {
        MachineState::Running => label.green().to_string(),
        MachineState::Idle => label.yellow().to_string(),
        MachineState::Maintenance => label.yellow().to_string(),
        MachineState::Error => label.red().to_string(),
    }
}

/// Color an insight impact label
pub fn color_impact(impact: Impact) -> String {
    let label = impact.to_string();
    match impact {
        Impact::Low => label.blue().to_string(),
        Impact::Medium => label.yellow().to_string(),
        Impact::High => label.red().to_string(),
        Impact::Critical => label.red().bold().to_string(),
    }
}

/// Color a confidence percentage (0-100 scale)
pub fn color_confidence(confidence: f64) -> String {
    let formatted = format_percent(confidence);
    if confidence >= 80.0 {
        formatted.green().to_string()
    } else if confidence >= 60.0 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Color a failure probability (0-100 scale)
pub fn color_risk(probability: f64) -> String {
    let formatted = format_percent(probability);
    if probability > 70.0 {
        formatted.red().to_string()
    } else if probability > 40.0 {
        formatted.yellow().to_string()
    } else {
        formatted.green().to_string()
    }
}
