//! Prediction Service

use feature_engine::{FeatureEncoder, HouseFeatures, Scaler};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::model::{load_model, Regressor};
use crate::InferenceError;

/// Result of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Predicted price in Lakhs, unclamped
    pub price_lacs: f64,
    /// Encode + inference time in microseconds
    pub latency_us: u64,
}

/// Encoder and model, loaded once and shared read-only
#[derive(Clone)]
pub struct PricePredictor {
    encoder: FeatureEncoder,
    model: Arc<dyn Regressor>,
}

impl PricePredictor {
    /// Build a predictor from already-loaded parts
    pub fn new(encoder: FeatureEncoder, model: Arc<dyn Regressor>) -> Self {
        Self { encoder, model }
    }

    /// Load the scaler and model artifacts from disk
    pub fn from_artifacts(
        model_path: impl AsRef<Path>,
        scaler_path: impl AsRef<Path>,
    ) -> Result<Self, InferenceError> {
        let scaler = Scaler::load(scaler_path)?;
        let model = load_model(model_path)?;
        info!(
            "Predictor ready: model={}, scaler={}",
            model.name(),
            scaler.method_name()
        );
        Ok(Self::new(FeatureEncoder::new(Arc::new(scaler)), model))
    }

    /// Encode one record and run a single inference call
    pub fn predict(&self, record: &HouseFeatures) -> Result<PriceEstimate, InferenceError> {
        let start = std::time::Instant::now();

        let features = self.encoder.encode(record);
        let price_lacs = self.model.predict(&features)?;

        if !price_lacs.is_finite() {
            return Err(InferenceError::InferenceFailed(format!(
                "model returned non-finite price {}",
                price_lacs
            )));
        }
        if price_lacs < 0.0 {
            warn!("Model predicted a negative price: {:.3}", price_lacs);
        }

        let latency_us = start.elapsed().as_micros() as u64;
        debug!("Predicted {:.3} lacs in {}us", price_lacs, latency_us);

        Ok(PriceEstimate {
            price_lacs,
            latency_us,
        })
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// Kind of the loaded model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}
