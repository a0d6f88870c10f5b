/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;

use draftsrt::app_config::{Config, LogLevel, OutputConfig};
use draftsrt::errors::ConfigError;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.path_file, "file-path.txt");
    assert_eq!(config.draft_file_name, "draft_content.json");
    assert_eq!(config.output.prefix, "subtitles");
    assert_eq!(config.output.directory, None);
    assert!(!config.output.force_overwrite);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.output.prefix = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config.output.prefix = "out/subs".to_string();
    assert!(config.validate().is_err());
    config.output.prefix = "subs".to_string();
    assert!(config.validate().is_ok());

    config.draft_file_name = String::new();
    assert!(config.validate().is_err());
    config.draft_file_name = "draft_content.json".to_string();

    config.path_file = String::new();
    assert!(config.validate().is_err());
}

/// Test partial config files fall back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"output": {"directory": "out"}, "log_level": "debug"}"#)?;

    assert_eq!(config.path_file, "file-path.txt");
    assert_eq!(
        config.output,
        OutputConfig {
            prefix: "subtitles".to_string(),
            directory: Some("out".to_string()),
            force_overwrite: false,
        }
    );
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    Ok(())
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaultConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&config_path)?;

    assert_eq!(config, Config::default());
    assert!(config_path.exists());
    let reloaded = Config::load_or_create(&config_path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_load_or_create_withInvalidFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "conf.json", "not json")?;

    assert!(Config::load_or_create(&config_path).is_err());
    Ok(())
}
