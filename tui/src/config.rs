//! TOML Configuration File Support
//!
//! Optional settings file at `$XDG_CONFIG_HOME/life-tui/config.toml`
//! (typically `~/.config/life-tui/config.toml`).
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! The defaults are the stock game: a 30x15 grid, a 50 ms render tick and a
//! generation every 200 ms. A missing file is not an error.
//!
//! # Example Configuration
//!
//! ```toml
//! [grid]
//! width = 40
//! height = 20
//!
//! [timing]
//! render_tick_ms = 50
//! simulation_step_ms = 120
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Initial grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 30;
/// Initial grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 15;
/// How often the loop wakes to advance and redraw
pub const DEFAULT_RENDER_TICK: Duration = Duration::from_millis(50);
/// Minimum wall-clock time between generations
pub const DEFAULT_SIMULATION_STEP: Duration = Duration::from_millis(200);

/// Upper bound on configured grid dimensions
const MAX_CONFIGURED_CELLS: usize = 10_000;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Grid section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridToml {
    /// Initial width in cells
    pub width: Option<usize>,
    /// Initial height in cells
    pub height: Option<usize>,
}

/// Timing section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingToml {
    /// Render tick period in milliseconds
    pub render_tick_ms: Option<u64>,
    /// Minimum time between generations in milliseconds
    pub simulation_step_ms: Option<u64>,
}

/// Root TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeToml {
    pub grid: GridToml,
    pub timing: TimingToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved settings for one run
#[derive(Clone, Debug)]
pub struct LifeConfig {
    /// Initial grid width in cells
    pub grid_width: usize,
    /// Initial grid height in cells
    pub grid_height: usize,
    /// Period of the render/simulation tick
    pub render_tick: Duration,
    /// Minimum wall-clock time between generations
    pub simulation_step: Duration,
    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            render_tick: DEFAULT_RENDER_TICK,
            simulation_step: DEFAULT_SIMULATION_STEP,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl LifeConfig {
    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for zero or absurd values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("grid.width", self.grid_width), ("grid.height", self.grid_height)] {
            if value == 0 || value > MAX_CONFIGURED_CELLS {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be between 1 and {MAX_CONFIGURED_CELLS}, got {value}"
                )));
            }
        }
        if self.render_tick.is_zero() {
            return Err(ConfigError::ValidationError(
                "timing.render_tick_ms must be greater than 0".to_string(),
            ));
        }
        if self.simulation_step.is_zero() {
            return Err(ConfigError::ValidationError(
                "timing.simulation_step_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/life-tui/config.toml` or
/// `~/.config/life-tui/config.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("life-tui").join("config.toml"))
}

/// Load configuration from the default path and the process environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if the
/// resulting values fail validation.
pub fn load_config() -> Result<LifeConfig, ConfigError> {
    load_config_from_path(default_config_path(), |key| std::env::var(key).ok())
}

/// Load configuration from a specific path and an environment lookup
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
/// * `env` - Looks up an environment variable by name.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path<F>(path: Option<PathBuf>, env: F) -> Result<LifeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults
    let mut config = LifeConfig::default();

    // Try to load from file
    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: LifeToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    // Apply environment variables (overrides file values)
    apply_env_config(&mut config, env);

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut LifeConfig, toml: &LifeToml) {
    if let Some(width) = toml.grid.width {
        config.grid_width = width;
    }
    if let Some(height) = toml.grid.height {
        config.grid_height = height;
    }
    if let Some(ms) = toml.timing.render_tick_ms {
        config.render_tick = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.timing.simulation_step_ms {
        config.simulation_step = Duration::from_millis(ms);
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config<F>(config: &mut LifeConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(width) = parse_env::<usize, _>(&env, "LIFE_TUI_GRID_WIDTH") {
        config.grid_width = width;
        config.source = ConfigSource::Env;
    }
    if let Some(height) = parse_env::<usize, _>(&env, "LIFE_TUI_GRID_HEIGHT") {
        config.grid_height = height;
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parse_env::<u64, _>(&env, "LIFE_TUI_RENDER_TICK_MS") {
        config.render_tick = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parse_env::<u64, _>(&env, "LIFE_TUI_STEP_MS") {
        config.simulation_step = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
}

fn parse_env<T, F>(env: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}
