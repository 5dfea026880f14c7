//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::naver::Sort;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Bundled API credentials; usable out of the box, overridable per session.
pub const DEFAULT_CLIENT_ID: &str = "pd94lBRrTSMumqSi9QYe";
pub const DEFAULT_CLIENT_SECRET: &str = "sMmdrZWOEr";

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API client id header value
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// API client secret header value
    #[serde(default = "default_client_secret")]
    pub client_secret: String,

    /// Result count per search, clamped to [10, 100] by the client
    #[serde(default = "default_display")]
    pub display: u32,

    /// Sort order
    #[serde(default)]
    pub sort: Sort,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Filter: minimum price in won
    #[serde(default)]
    pub min_price: u64,

    /// Filter: maximum price in won; 0 means unbounded
    #[serde(default)]
    pub max_price: u64,

    /// Filter: brand allow-list matched against titles
    #[serde(default)]
    pub brands: Vec<String>,
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

fn default_client_secret() -> String {
    DEFAULT_CLIENT_SECRET.to_string()
}

fn default_display() -> u32 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            client_secret: default_client_secret(),
            display: default_display(),
            sort: Sort::Sim,
            format: OutputFormat::Table,
            min_price: 0,
            max_price: 0,
            brands: Vec::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("naver-compare").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(id) = std::env::var("NAVER_CLIENT_ID") {
            self.client_id = id;
        }

        if let Ok(secret) = std::env::var("NAVER_CLIENT_SECRET") {
            self.client_secret = secret;
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
