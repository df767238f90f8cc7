//! Production Analytics CLI
//!
//! Composition root for the analytics engine: loads configuration,
//! constructs one engine instance, and renders the in-process query API
//! as tables or JSON.

mod commands;
mod config;
mod output;

use analytics_lib::{AnalyticsEngine, MaterialGrade, QualityParams};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Production Analytics CLI
#[derive(Parser)]
#[command(name = "pa")]
#[command(author, version, about = "CLI for the Production Analytics engine", long_about = None)]
pub struct Cli {
    /// Noise seed for reproducible output (entropy-seeded if omitted)
    #[arg(long, env = "PA_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current production metrics snapshot
    Metrics,

    /// Show prediction-derived status for every rostered machine
    Machines,

    /// Forecast future efficiency or demand
    #[command(subcommand)]
    Forecast(ForecastCommands),

    /// Run a predictor directly
    #[command(subcommand)]
    Predict(PredictCommands),

    /// Show all currently triggered insights
    Insights,

    /// List the registered prediction models
    Models,
}

#[derive(Subcommand)]
pub enum ForecastCommands {
    /// Hourly efficiency forecast for one machine
    Efficiency {
        /// Machine identifier
        #[arg(long, short, default_value = "CNC-001")]
        machine: String,

        /// Forecast horizon in hours (up to one year)
        #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..=8760))]
        hours: u32,
    },

    /// Daily demand forecast for a product
    Demand {
        /// Product type
        #[arg(long, short, default_value = "hydraulic_cylinders")]
        product: String,

        /// Forecast horizon in days (up to one year)
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=365))]
        days: u32,
    },
}

#[derive(Subcommand)]
pub enum PredictCommands {
    /// Maintenance outlook for one machine
    Maintenance {
        /// Machine identifier
        #[arg(long, short, default_value = "CNC-001")]
        machine: String,
    },

    /// Quality outcome for a set of process parameters
    Quality {
        /// Process temperature in degrees Celsius
        #[arg(long)]
        temperature: f64,

        /// Hydraulic pressure in bar
        #[arg(long)]
        pressure: f64,

        /// Material grade
        #[arg(long, default_value = "a")]
        material_grade: GradeArg,

        /// Operator experience in years
        #[arg(long, default_value_t = 5.0)]
        operator_experience: f64,
    },
}

/// Material grade CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GradeArg {
    A,
    B,
    C,
}

impl From<GradeArg> for MaterialGrade {
    fn from(grade: GradeArg) -> Self {
        match grade {
            GradeArg::A => MaterialGrade::A,
            GradeArg::B => MaterialGrade::B,
            GradeArg::C => MaterialGrade::C,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let engine_config = config::load()?;
    let engine = match cli.seed {
        Some(seed) => AnalyticsEngine::with_seed(engine_config, seed)?,
        None => AnalyticsEngine::new(engine_config)?,
    };
    debug!(
        machines = engine.config().machines.len(),
        seeded = cli.seed.is_some(),
        "Engine constructed"
    );

    match cli.command {
        Commands::Metrics => commands::metrics::show(&engine, cli.format)?,
        Commands::Machines => commands::machines::show(&engine, cli.format)?,
        Commands::Forecast(forecast_cmd) => match forecast_cmd {
            ForecastCommands::Efficiency { machine, hours } => {
                commands::forecast::efficiency(&engine, &machine, hours, cli.format)?;
            }
            ForecastCommands::Demand { product, days } => {
                commands::forecast::demand(&engine, &product, days, cli.format)?;
            }
        },
        Commands::Predict(predict_cmd) => match predict_cmd {
            PredictCommands::Maintenance { machine } => {
                commands::predict::maintenance(&engine, &machine, cli.format)?;
            }
            PredictCommands::Quality {
                temperature,
                pressure,
                material_grade,
                operator_experience,
            } => {
                let params = QualityParams {
                    temperature,
                    pressure,
                    material_grade: material_grade.into(),
                    operator_experience,
                };
                commands::predict::quality(&engine, params, cli.format)?;
            }
        },
        Commands::Insights => commands::insights::show(&engine, cli.format)?,
        Commands::Models => commands::models::show(&engine, cli.format)?,
    }

    Ok(())
}
