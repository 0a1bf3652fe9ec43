use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// How the in-memory store is seeded at startup.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    Store,
    Empty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub source: SeedMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub seat_occupancy_rate: f64,
    pub checkin_opens_hours: i64,
    pub checkin_closes_hours: i64,
    pub currency: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        defaults()?
            // Every file is optional; the defaults above are enough to boot
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(File::with_name("config/local").required(false))
            // e.g. `AIRDREAM__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("AIRDREAM").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with a single TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.port", 3000)?
        .set_default("data.source", "store")?
        .set_default("business_rules.seat_occupancy_rate", 0.3)?
        .set_default("business_rules.checkin_opens_hours", 24)?
        .set_default("business_rules.checkin_closes_hours", 2)?
        .set_default("business_rules.currency", "USD")
}
