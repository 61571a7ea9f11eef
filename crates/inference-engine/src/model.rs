//! Model Artifacts

use feature_engine::{FeatureVector, FEATURE_DIMENSION, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::onnx::OnnxRegressor;
use crate::InferenceError;

/// A trained model mapping one feature vector to one price
pub trait Regressor: Send + Sync {
    /// Predict the price (in Lakhs) for scaled features
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;

    /// Human-readable model kind
    fn name(&self) -> &str;
}

/// Linear model exported as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    schema_version: u32,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, InferenceError> {
        Self {
            schema_version: SCHEMA_VERSION,
            coefficients,
            intercept,
        }
        .validated()
    }

    fn validated(self) -> Result<Self, InferenceError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(InferenceError::ModelLoadError(format!(
                "linear model built for schema {}, serving schema {}",
                self.schema_version, SCHEMA_VERSION
            )));
        }
        if self.coefficients.len() != FEATURE_DIMENSION {
            return Err(InferenceError::InvalidInputShape {
                expected: FEATURE_DIMENSION.to_string(),
                actual: self.coefficients.len().to_string(),
            });
        }
        Ok(self)
    }

    pub fn from_json(json: &str) -> Result<Self, InferenceError> {
        let model: Self = serde_json::from_str(json)
            .map_err(|e| InferenceError::ModelLoadError(format!("invalid linear model: {}", e)))?;
        model.validated()
    }

    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.values())
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.intercept)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Load a model, choosing the back end from the file extension
pub fn load_model(path: impl AsRef<Path>) -> Result<Arc<dyn Regressor>, InferenceError> {
    let path = path.as_ref();
    info!("Loading model from {}", path.display());

    match path.extension().and_then(|e| e.to_str()) {
        Some("onnx") => Ok(Arc::new(OnnxRegressor::load(path)?)),
        Some("json") => Ok(Arc::new(LinearRegressor::load(path)?)),
        other => Err(InferenceError::ModelLoadError(format!(
            "unsupported model format {:?} for {}",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}
