use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration for the CLI itself, merged from `Overdue.toml` and
/// `OVERDUE_`-prefixed environment variables. Distinct from the settings
/// store, which remembers the user's spreadsheet and column choices.
#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,
    /// Default startup delay in seconds; `--delay` overrides it.
    #[serde(default)]
    pub delay_secs: u64,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("Overdue.toml"))
            .merge(Env::prefixed("OVERDUE_"))
            .extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
            delay_secs: 0,
        }
    }
}

fn default_settings_file() -> PathBuf {
    PathBuf::from(".env")
}
