use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// File holding the path of the draft to convert when none is given on
    /// the command line
    #[serde(default = "default_path_file")]
    pub path_file: String,

    /// File name searched for when converting a whole folder
    #[serde(default = "default_draft_file_name")]
    pub draft_file_name: String,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output file settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Output file name prefix; files are named `<prefix>-<suffix>.srt`
    #[serde(default = "default_output_prefix")]
    pub prefix: String,

    /// Output directory; when empty the draft's own directory is used
    #[serde(default)]
    pub directory: Option<String>,

    /// Whether existing output files may be replaced
    #[serde(default)]
    pub force_overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_output_prefix(),
            directory: None,
            force_overwrite: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_path_file() -> String {
    "file-path.txt".to_string()
}

fn default_draft_file_name() -> String {
    "draft_content.json".to_string()
}

fn default_output_prefix() -> String {
    "subtitles".to_string()
}

impl Config {
    /// Load the configuration file, writing a default one when it does not exist
    pub fn load_or_create<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let file = File::open(config_path)
                .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", config_path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.path_file.trim().is_empty() {
            return Err(ConfigError::Invalid("path_file must not be empty".to_string()));
        }

        if self.draft_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("draft_file_name must not be empty".to_string()));
        }

        let prefix = &self.output.prefix;
        if prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("output.prefix must not be empty".to_string()));
        }
        if prefix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "output.prefix must be a file name, not a path: {}",
                prefix
            )));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            path_file: default_path_file(),
            draft_file_name: default_draft_file_name(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
