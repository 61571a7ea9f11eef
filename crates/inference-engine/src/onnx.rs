//! ONNX Regressor using tract

use feature_engine::{FeatureVector, FEATURE_DIMENSION};
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::info;

use crate::model::Regressor;
use crate::InferenceError;

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX export of the trained regressor, optimised once at load
pub struct OnnxRegressor {
    plan: OnnxPlan,
}

impl OnnxRegressor {
    /// Load and optimise the model for a `[1, 22]` f32 input
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, FEATURE_DIMENSION]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        info!("ONNX model loaded from {}", path.display());
        Ok(Self { plan })
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let input = tract_ndarray::Array2::from_shape_vec((1, FEATURE_DIMENSION), features.to_f32())
            .map_err(|e| InferenceError::InvalidInputShape {
                expected: format!("[1, {}]", FEATURE_DIMENSION),
                actual: e.to_string(),
            })?;
        let input: Tensor = input.into();

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::InferenceFailed("model produced no outputs".to_string()))?;
        // Regressor exports emit either float or double
        let output = output
            .cast_to::<f64>()
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;
        let values = output
            .as_slice::<f64>()
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        values
            .first()
            .copied()
            .ok_or_else(|| InferenceError::InferenceFailed("empty output tensor".to_string()))
    }

    fn name(&self) -> &str {
        "onnx"
    }
}
