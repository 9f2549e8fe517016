use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Directory data source
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Chart defaults
    #[serde(default)]
    pub chart: ChartConfig,
    /// Initial UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// TOML seed with managers, administrators and buildings
    /// (built-in demo data when unset)
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// Simulated fetch delay in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            latency_ms: default_latency_ms(),
        }
    }
}

impl DirectoryConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Scale used when a request does not pass one
    #[serde(default = "default_scale")]
    pub default_scale: f32,
    /// Manager id used when a request does not pass one
    #[serde(default = "default_root")]
    pub default_root: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_scale: default_scale(),
            default_root: default_root(),
        }
    }
}

/// Process-wide UI preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiPreferences {
    #[serde(default, rename = "darkMode", alias = "dark_mode")]
    pub dark_mode: bool,
}

// Default value functions
fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_latency_ms() -> u64 {
    300
}

fn default_scale() -> f32 {
    1.0
}

fn default_root() -> String {
    "m1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            log: LogConfig::default(),
            directory: DirectoryConfig::default(),
            chart: ChartConfig::default(),
            ui: UiPreferences::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Seed paths are relative to the config file
        if let Some(seed) = config.directory.seed_file.as_mut() {
            if seed.is_relative() {
                let base = Path::new(path).parent().unwrap_or_else(|| Path::new("."));
                *seed = base.join(&*seed);
            }
        }

        Ok(config)
    }
}
