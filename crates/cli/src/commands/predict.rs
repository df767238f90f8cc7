//! Direct predictor commands

use analytics_lib::{AnalyticsEngine, QualityParams};
use anyhow::Result;
use colored::Colorize;

use crate::output::{color_confidence, color_risk, format_percent, OutputFormat};

/// Show the maintenance outlook for one machine
pub fn maintenance(engine: &AnalyticsEngine, machine: &str, format: OutputFormat) -> Result<()> {
    let prediction = engine.predict_maintenance(machine);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&prediction)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", format!("Maintenance Outlook for {}", machine).bold());
            println!("{}", "=".repeat(50));
            println!("Failure probability:  {}", color_risk(prediction.probability));
            println!("Days until window:    {}", prediction.days_until);
            println!("Confidence:           {}", color_confidence(prediction.confidence));
        }
    }

    Ok(())
}

/// Predict quality outcome for process parameters
pub fn quality(engine: &AnalyticsEngine, params: QualityParams, format: OutputFormat) -> Result<()> {
    let prediction = engine.predict_quality(params);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&prediction)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", "Quality Prediction".bold());
            println!("{}", "=".repeat(50));
            println!("Quality score:        {}", format_percent(prediction.quality_score));
            println!("Defect probability:   {}", color_risk(prediction.defect_probability));
            println!("Confidence:           {}", color_confidence(prediction.confidence));
            println!();
            println!("{}", "Parameters".bold());
            println!("{}", "-".repeat(50));
            println!("Temperature:          {:.1}°C", prediction.factors.temperature);
            println!("Pressure:             {:.1} bar", prediction.factors.pressure);
            println!("Material grade:       {}", prediction.factors.material_grade);
            println!("Operator experience:  {:.0} years", prediction.factors.operator_experience);
        }
    }

    Ok(())
}
