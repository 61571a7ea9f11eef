//! Housing Price Inference
//!
//! Loads the trained regressor and runs the encode → scale → predict
//! pipeline for a single housing record.

mod engine;
mod model;
mod onnx;

pub use engine::{PriceEstimate, PricePredictor};
pub use model::{load_model, LinearRegressor, Regressor};
pub use onnx::OnnxRegressor;

use feature_engine::FeatureError;
use thiserror::Error;

/// Errors during model loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
    #[error("Feature artifact error: {0}")]
    Feature(#[from] FeatureError),
}
