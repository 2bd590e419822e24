use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::ConnectionWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub roster: RosterSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    /// Roster file loaded at startup
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_roommate_weight")]
    pub roommate: u32,
    #[serde(default = "default_shared_internship_weight")]
    pub shared_internship: u32,
    #[serde(default = "default_same_major_weight")]
    pub same_major: u32,
    #[serde(default = "default_same_age_weight")]
    pub same_age: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            roommate: default_roommate_weight(),
            shared_internship: default_shared_internship_weight(),
            same_major: default_same_major_weight(),
            same_age: default_same_age_weight(),
        }
    }
}

impl From<&WeightsConfig> for ConnectionWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            roommate: config.roommate,
            shared_internship: config.shared_internship,
            same_major: config.same_major,
            same_age: config.same_age,
        }
    }
}

fn default_roommate_weight() -> u32 { 4 }
fn default_shared_internship_weight() -> u32 { 3 }
fn default_same_major_weight() -> u32 { 2 }
fn default_same_age_weight() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAMPUS__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("roster.path", "data/roster.txt")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAMPUS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CAMPUS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn connection_weights(&self) -> ConnectionWeights {
        ConnectionWeights::from(&self.scoring.weights)
    }
}
