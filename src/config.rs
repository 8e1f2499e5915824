//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Every field has a default, so the dashboard runs with no config at all:
//! it reads `spacex_launch_dash.csv` and serves on `127.0.0.1:8050`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Invalid log format: {}. Use pretty or json", other)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            source: ConfigSource::File(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    ///
    /// Never fails: an unreadable config file is skipped and reported in
    /// [`LoadedConfig::warnings`] so the caller can log it once tracing is up.
    pub fn load_default() -> LoadedConfig {
        Self::resolve(&Self::default_paths(), |key| std::env::var(key).ok())
    }

    fn resolve<F>(paths: &[PathBuf], lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    warnings.extend(config.apply_overrides(&lookup));
                    return LoadedConfig {
                        config,
                        source: ConfigSource::File(path.clone()),
                        warnings,
                    };
                }
                Err(e) => warnings.push(e.to_string()),
            }
        }

        let mut config = Config::default();
        warnings.extend(config.apply_overrides(&lookup));
        LoadedConfig {
            config,
            source: ConfigSource::Defaults,
            warnings,
        }
    }

    /// Config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("launch-dash").join("config.toml")),
            Some(PathBuf::from("./launch-dash.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply command-line overrides, the last layer of resolution
    pub fn apply_cli(&mut self, overrides: &CliOverrides) {
        if let Some(data) = &overrides.data {
            self.data.path = data.clone();
        }
        if let Some(host) = &overrides.host {
            self.server.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment in production).
    /// Returns a message for every value that was ignored.
    fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(path) = lookup("LAUNCH_DASH_DATA") {
            self.data.path = PathBuf::from(path);
        }

        if let Some(host) = lookup("LAUNCH_DASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LAUNCH_DASH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => ignored.push(format!("Ignoring invalid LAUNCH_DASH_PORT: {}", port)),
            }
        }

        if let Some(level) = lookup("LAUNCH_DASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LAUNCH_DASH_LOG_FORMAT") {
            match format.parse::<LogFormat>() {
                Ok(f) => self.logging.format = f,
                Err(e) => ignored.push(format!("Ignoring LAUNCH_DASH_LOG_FORMAT: {}", e)),
            }
        }

        ignored
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// Result of config resolution, kept until a subscriber can log it
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    /// Config files and environment values that were skipped
    pub warnings: Vec<String>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Launch Dash Configuration
#
# Environment variables override these settings:
# - LAUNCH_DASH_DATA
# - LAUNCH_DASH_HOST
# - LAUNCH_DASH_PORT
# - LAUNCH_DASH_LOG_LEVEL
# - LAUNCH_DASH_LOG_FORMAT

[data]
# CSV file with Launch Site, Payload Mass (kg), class and
# Booster Version Category columns
path = "spacex_launch_dash.csv"

[server]
# Dashboard server host
host = "127.0.0.1"

# Dashboard server port
port = 8050

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
