//! Configuration for the `tagged` command line tool.
//!
//! Parses `tagged.toml` files with serde and discovers them in the current
//! directory or its parents. CLI settings can be applied during load via
//! [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String settings support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `list.delimiter`
//! - `list.final_delimiter`
//! - `list.more_text`
//! - `preview.ellipsis`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the inline list delimiter.
    pub delimiter: Option<String>,
    /// Override the delimiter before the last inline item.
    pub final_delimiter: Option<String>,
    /// Override the inline list limit.
    pub limit: Option<usize>,
    /// Override the preview length.
    pub max_length: Option<usize>,
    /// Override pretty rendering.
    pub pretty: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tagged.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inline list defaults.
    pub list: ListConfig,
    /// Preview defaults.
    pub preview: PreviewConfig,
    /// Output settings.
    pub render: RenderConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Inline list configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Separator between items.
    pub delimiter: String,
    /// Separator before the last visible item.
    pub final_delimiter: Option<String>,
    /// Maximum number of visible items; 0 shows only the overflow marker.
    pub limit: Option<usize>,
    /// Text before the overflow count.
    pub more_text: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            delimiter: ", ".to_owned(),
            final_delimiter: None,
            limit: None,
            more_text: "…+ ".to_owned(),
        }
    }
}

/// Preview configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Characters kept before truncating.
    pub max_length: Option<usize>,
    /// Suffix for truncated previews.
    pub ellipsis: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_length: None,
            ellipsis: "…".to_owned(),
        }
    }
}

/// Render configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Indent block children on their own lines.
    pub pretty: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`list.delimiter`").
        field: String,
        /// Error message (e.g., "${`LIST_DELIMITER`} not set").
        message: String,
    },
}

/// Require an optional count to be positive when set.
fn require_positive(value: Option<usize>, field: &str) -> Result<(), ConfigError> {
    if value == Some(0) {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tagged.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(delimiter) = &settings.delimiter {
            self.list.delimiter.clone_from(delimiter);
        }
        if let Some(final_delimiter) = &settings.final_delimiter {
            self.list.final_delimiter = Some(final_delimiter.clone());
        }
        if let Some(limit) = settings.limit {
            self.list.limit = Some(limit);
        }
        if let Some(max_length) = settings.max_length {
            self.preview.max_length = Some(max_length);
        }
        if let Some(pretty) = settings.pretty {
            self.render.pretty = pretty;
        }
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the preview length is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(self.preview.max_length, "preview.max_length")?;
        Ok(())
    }

    /// Expand environment variable references in string settings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.list.delimiter = expand::expand_env(&self.list.delimiter, "list.delimiter")?;
        self.list.final_delimiter = expand::expand_env_opt(
            self.list.final_delimiter.as_deref(),
            "list.final_delimiter",
        )?;
        self.list.more_text = expand::expand_env(&self.list.more_text, "list.more_text")?;
        self.preview.ellipsis = expand::expand_env(&self.preview.ellipsis, "preview.ellipsis")?;
        Ok(())
    }
}
