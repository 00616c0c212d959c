//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use canvasmark::{
    CanvasmarkError,
    config::{AppConfig, MAX_INDENT_WIDTH},
};

/// Path of the configuration file looked up relative to the working directory.
const LOCAL_CONFIG_PATH: &str = "canvasmark/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for CanvasmarkError {
    fn from(err: ConfigError) -> Self {
        CanvasmarkError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (canvasmark/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - A value is out of range (`indent_width` above [`MAX_INDENT_WIDTH`])
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CanvasmarkError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG_PATH);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "canvasmark", "canvasmark") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or is not valid
/// TOML for [`AppConfig`].
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CanvasmarkError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(Into::into)
}

/// Parse and validate the TOML text of a configuration file.
fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    let indent_width = config.outline().indent_width();
    if indent_width > MAX_INDENT_WIDTH {
        return Err(ConfigError::Validation(format!(
            "outline.indent_width must be at most {MAX_INDENT_WIDTH}, got {indent_width}"
        )));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [outline]
            ungrouped_title = "Loose notes"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.outline().ungrouped_title(), "Loose notes");
        assert_eq!(config.outline().group_placeholder(), "Group");
        assert_eq!(config.outline().indent_width(), 2);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").expect("empty config is valid");
        assert_eq!(config.outline().group_placeholder(), "Group");
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("[outline]\nindent_width = \"wide\"").expect_err("wrong type");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_oversized_indent_width() {
        let err = parse_config("[outline]\nindent_width = 9223372036854775807")
            .expect_err("indent width out of range");

        match err {
            ConfigError::Validation(message) => assert!(message.contains("indent_width")),
            other => panic!("Expected validation error, got {other:?}"),
        }
        assert!(parse_config("[outline]\nindent_width = 16").is_ok());
        assert!(parse_config("[outline]\nindent_width = 17").is_err());
    }

    #[test]
    fn test_explicit_path() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[outline]\nindent_width = 4\ngroup_placeholder = \"Box\"\n")
            .expect("Failed to write config");

        let config = load_config(Some(&path)).expect("config loads");

        assert_eq!(config.outline().indent_width(), 4);
        assert_eq!(config.outline().group_placeholder(), "Box");
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).expect_err("missing file is an error");

        match err {
            CanvasmarkError::Config(message) => {
                assert!(message.starts_with("Missing configuration file"));
            }
            other => panic!("Expected config error, got {other:?}"),
        }
    }
}
