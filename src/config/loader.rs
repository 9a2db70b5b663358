//! Configuration file loading with precedence handling.

use super::keybindings::{KeyBindingError, KeyBindings};
use crate::model::Category;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FLASHDECK_CONFIG";

/// Environment variable overriding the deck category.
pub const CATEGORY_ENV_VAR: &str = "FLASHDECK_CATEGORY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Category name is not `general` or `coding`.
    #[error("Unknown category `{0}` (expected `general` or `coding`)")]
    UnknownCategory(String),

    /// `[keybindings]` table could not be applied.
    #[error(transparent)]
    InvalidKeyBinding(#[from] KeyBindingError),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/flashdeck/config.toml`.
///
/// ```toml
/// category = "coding"
/// shuffle_on_start = true
/// deck_path = "~/decks/interview.json"
///
/// [keybindings]
/// flip = ["space", "f"]
/// knew_it = ["y"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Deck category to review (`general` or `coding`).
    #[serde(default)]
    pub category: Option<String>,

    /// Shuffle the deck once before the first card is shown.
    #[serde(default)]
    pub shuffle_on_start: Option<bool>,

    /// JSON deck file. Built-in sample decks are used when absent.
    #[serde(default)]
    pub deck_path: Option<PathBuf>,

    /// JSON Lines file that receives one record per rating.
    #[serde(default)]
    pub progress_log_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Action name to key strings, replacing that action's defaults.
    #[serde(default)]
    pub keybindings: Option<HashMap<String, Vec<String>>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Deck category.
    pub category: Category,
    /// Shuffle before the first card.
    pub shuffle_on_start: bool,
    /// Deck file, if any.
    pub deck_path: Option<PathBuf>,
    /// Progress log, if any.
    pub progress_log_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides from the config file.
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            category: Category::General,
            shuffle_on_start: false,
            deck_path: None,
            progress_log_path: None,
            log_file_path: default_log_path(),
            keybindings: HashMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Default key bindings with this config's overrides applied.
    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        Ok(KeyBindings::default().with_overrides(&self.keybindings)?)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/flashdeck/flashdeck.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("flashdeck").join("flashdeck.log")
    } else {
        PathBuf::from("flashdeck.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/flashdeck/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flashdeck").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FLASHDECK_CONFIG` environment variable
/// 3. Default path `~/.config/flashdeck/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()))
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FLASHDECK_CATEGORY`: Override deck category
///
/// # Errors
///
/// Returns [`ConfigError::UnknownCategory`] if the variable names no category.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(category) = std::env::var(CATEGORY_ENV_VAR) {
        config.category = parse_category(&category)?;
    }

    Ok(config)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownCategory`] for an unrecognized `category`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let category = match config.category {
        Some(name) => parse_category(&name)?,
        None => defaults.category,
    };

    Ok(ResolvedConfig {
        category,
        shuffle_on_start: config.shuffle_on_start.unwrap_or(defaults.shuffle_on_start),
        deck_path: config.deck_path.or(defaults.deck_path),
        progress_log_path: config.progress_log_path.or(defaults.progress_log_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    })
}

/// Flags the user set on the command line. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--category`.
    pub category: Option<Category>,
    /// `--shuffle`.
    pub shuffle: Option<bool>,
    /// Positional deck file.
    pub deck_path: Option<PathBuf>,
    /// `--progress-log`.
    pub progress_log_path: Option<PathBuf>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(category) = cli.category {
        config.category = category;
    }

    if let Some(shuffle) = cli.shuffle {
        config.shuffle_on_start = shuffle;
    }

    if let Some(path) = cli.deck_path {
        config.deck_path = Some(path);
    }

    if let Some(path) = cli.progress_log_path {
        config.progress_log_path = Some(path);
    }

    config
}

fn parse_category(name: &str) -> Result<Category, ConfigError> {
    Category::parse(name).ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
