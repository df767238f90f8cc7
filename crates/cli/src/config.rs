//! CLI configuration

use analytics_lib::EngineConfig;
use anyhow::Result;
use tracing::warn;

/// Load engine configuration from `PA_*` environment variables
///
/// Unset variables fall back to the engine defaults (168h history, the
/// six-machine roster, CNC-001 as the reference machine). Malformed values
/// are logged and the defaults used instead.
pub fn load() -> Result<EngineConfig> {
    let config = config::Config::builder()
        .add_source(config::Environment::with_prefix("PA"))
        .build()?;

    Ok(config.try_deserialize().unwrap_or_else(|err| {
        warn!(%err, "Invalid PA_* configuration, falling back to defaults");
        EngineConfig::default()
    }))
}
