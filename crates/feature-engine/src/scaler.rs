//! Pre-fitted Scaling Transform
//!
//! Parameters are fitted once at training time and exported as JSON next to
//! the model. The artifact names its schema version and columns; both are
//! checked against [`crate::schema`] before the scaler is accepted.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::encoder::FeatureVector;
use crate::error::FeatureError;
use crate::schema::{COLUMNS, FEATURE_DIMENSION, SCHEMA_VERSION};

/// Per-column linear rescaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalingMethod {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
    /// Values pass through unchanged
    Identity,
}

/// On-disk layout of the scaler artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScalerArtifact {
    schema_version: u32,
    columns: Vec<String>,
    method: ScalingMethod,
}

/// Validated scaler, read-only once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    method: ScalingMethod,
}

impl Scaler {
    /// Scaler that leaves features untouched
    pub fn identity() -> Self {
        Self {
            method: ScalingMethod::Identity,
        }
    }

    /// Standardisation with the given per-column mean and scale
    pub fn standard(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, FeatureError> {
        Self::from_method(ScalingMethod::Standard { mean, scale })
    }

    /// Min-max scaling with the given per-column offset and scale
    pub fn min_max(min: Vec<f64>, scale: Vec<f64>) -> Result<Self, FeatureError> {
        Self::from_method(ScalingMethod::MinMax { min, scale })
    }

    fn from_method(method: ScalingMethod) -> Result<Self, FeatureError> {
        let method = match method {
            ScalingMethod::Standard { mean, scale } => {
                check_len("mean", &mean)?;
                check_len("scale", &scale)?;
                // Constant training columns were fitted with a zero scale
                let scale = scale
                    .into_iter()
                    .map(|s| if s == 0.0 { 1.0 } else { s })
                    .collect();
                ScalingMethod::Standard { mean, scale }
            }
            ScalingMethod::MinMax { min, scale } => {
                check_len("min", &min)?;
                check_len("scale", &scale)?;
                ScalingMethod::MinMax { min, scale }
            }
            ScalingMethod::Identity => ScalingMethod::Identity,
        };
        Ok(Self { method })
    }

    /// Parse and validate a scaler artifact
    pub fn from_json(json: &str) -> Result<Self, FeatureError> {
        let artifact: ScalerArtifact = serde_json::from_str(json)?;

        if artifact.schema_version != SCHEMA_VERSION {
            return Err(FeatureError::SchemaVersion {
                expected: SCHEMA_VERSION,
                actual: artifact.schema_version,
            });
        }

        check_len("columns", &artifact.columns)?;
        for (index, (&expected, actual)) in COLUMNS.iter().zip(&artifact.columns).enumerate() {
            if expected != actual.as_str() {
                return Err(FeatureError::ColumnMismatch {
                    index,
                    expected,
                    actual: actual.clone(),
                });
            }
        }

        Self::from_method(artifact.method)
    }

    /// Load a scaler artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeatureError> {
        let path = path.as_ref();
        info!("Loading scaler from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| FeatureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let scaler = Self::from_json(&json)?;
        debug!("Scaler method: {}", scaler.method_name());
        Ok(scaler)
    }

    /// Serialize back to the artifact layout
    pub fn to_json(&self) -> Result<String, FeatureError> {
        let artifact = ScalerArtifact {
            schema_version: SCHEMA_VERSION,
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            method: self.method.clone(),
        };
        Ok(serde_json::to_string_pretty(&artifact)?)
    }

    /// Short name of the scaling method
    pub fn method_name(&self) -> &'static str {
        match self.method {
            ScalingMethod::Standard { .. } => "standard",
            ScalingMethod::MinMax { .. } => "min_max",
            ScalingMethod::Identity => "identity",
        }
    }

    /// Apply the transform column by column
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut values = *features.values();
        match &self.method {
            ScalingMethod::Standard { mean, scale } => {
                for (i, v) in values.iter_mut().enumerate() {
                    *v = (*v - mean[i]) / scale[i];
                }
            }
            ScalingMethod::MinMax { min, scale } => {
                for (i, v) in values.iter_mut().enumerate() {
                    *v = *v * scale[i] + min[i];
                }
            }
            ScalingMethod::Identity => {}
        }
        FeatureVector::from_values(values)
    }
}

fn check_len<T>(field: &'static str, values: &[T]) -> Result<(), FeatureError> {
    if values.len() != FEATURE_DIMENSION {
        return Err(FeatureError::DimensionMismatch {
            field,
            expected: FEATURE_DIMENSION,
            actual: values.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_json(columns: &[&str], version: u32) -> String {
        serde_json::json!({
            "schema_version": version,
            "columns": columns,
            "method": {
                "type": "standard",
                "mean": vec![1.0; columns.len()],
                "scale": vec![2.0; columns.len()],
            }
        })
        .to_string()
    }

    #[test]
    fn test_standard_transform() {
        let scaler = Scaler::standard(vec![1.0; FEATURE_DIMENSION], vec![2.0; FEATURE_DIMENSION]).unwrap();
        let input = FeatureVector::from_values([5.0; FEATURE_DIMENSION]);
        let output = scaler.transform(&input);
        assert!(output.values().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_zero_scale_passes_through_centred() {
        let mut scale = vec![2.0; FEATURE_DIMENSION];
        scale[0] = 0.0;
        let scaler = Scaler::standard(vec![1.0; FEATURE_DIMENSION], scale).unwrap();
        let output = scaler.transform(&FeatureVector::from_values([3.0; FEATURE_DIMENSION]));
        assert_eq!(output.values()[0], 2.0);
        assert!(output.values()[0].is_finite());
    }

    #[test]
    fn test_min_max_transform() {
        let scaler = Scaler::min_max(vec![-1.0; FEATURE_DIMENSION], vec![0.5; FEATURE_DIMENSION]).unwrap();
        let output = scaler.transform(&FeatureVector::from_values([4.0; FEATURE_DIMENSION]));
        assert!(output.values().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_identity_transform() {
        let input = FeatureVector::from_values([7.5; FEATURE_DIMENSION]);
        assert_eq!(Scaler::identity().transform(&input), input);
    }

    #[test]
    fn test_load_valid_artifact() {
        let scaler = Scaler::from_json(&artifact_json(&COLUMNS, SCHEMA_VERSION)).unwrap();
        assert_eq!(scaler.method_name(), "standard");
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let mut columns = COLUMNS;
        columns.swap(6, 7);
        let err = Scaler::from_json(&artifact_json(&columns, SCHEMA_VERSION)).unwrap_err();
        assert!(matches!(err, FeatureError::ColumnMismatch { index: 6, .. }));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let err = Scaler::from_json(&artifact_json(&COLUMNS, SCHEMA_VERSION + 1)).unwrap_err();
        assert!(matches!(err, FeatureError::SchemaVersion { .. }));
    }

    #[test]
    fn test_short_parameters_rejected() {
        let err = Scaler::standard(vec![0.0; 8], vec![1.0; 8]).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::DimensionMismatch { field: "mean", actual: 8, .. }
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let scaler = Scaler::min_max(vec![0.25; FEATURE_DIMENSION], vec![3.0; FEATURE_DIMENSION]).unwrap();
        let restored = Scaler::from_json(&scaler.to_json().unwrap()).unwrap();
        assert_eq!(restored, scaler);
    }

    #[test]
    fn test_missing_file() {
        let err = Scaler::load("/nonexistent/scaler.json").unwrap_err();
        assert!(matches!(err, FeatureError::Io { .. }));
    }
}
