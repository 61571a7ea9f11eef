//! Server Configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional config
//! file (`housing.toml`, or the path in `HOUSING_CONFIG`), then `HOUSING_*`
//! environment variables such as `HOUSING_MODEL_PATH`.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,
    /// Model artifact (`.onnx` or linear `.json`)
    pub model_path: PathBuf,
    /// Scaler artifact
    pub scaler_path: PathBuf,
    /// Max log level
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Install the Prometheus recorder
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            model_path: PathBuf::from("artifacts/house_price_model.onnx"),
            scaler_path: PathBuf::from("artifacts/scaler.json"),
            log_level: "info".to_string(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Load from the default file location and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var("HOUSING_CONFIG").unwrap_or_else(|_| "housing".to_string());
        Self::load_from(&file)
    }

    /// Load from a specific file (optional) and the environment
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("HOUSING").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
