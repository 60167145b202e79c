use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub cli: CliConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CliConfig {
    pub prompt: String,
    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is not set
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_schedule(None)
    }

    /// Like `load`, with an explicit schedule path taking precedence over every source.
    pub fn load_with_schedule(schedule_path: Option<&str>) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("schedule.path", "config.txt")?
            .set_default("cli.prompt", "Enter command: ")?
            .set_default("cli.output", "text")?
            .set_default("log.filter", "warn")?
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/test.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `AIRDESK_SCHEDULE__PATH=flights.txt`
            .add_source(
                config::Environment::with_prefix("AIRDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("schedule.path", schedule_path)?
            .build()?;

        s.try_deserialize()
    }
}
