//! Feature Vector Assembly

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::record::HouseFeatures;
use crate::scaler::Scaler;
use crate::schema::{column_index, City, SellerType, BASE_FEATURES, COLUMNS, FEATURE_DIMENSION};

/// Model input in schema column order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_DIMENSION],
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_DIMENSION],
        }
    }
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_DIMENSION]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64; FEATURE_DIMENSION] {
        &self.values
    }

    /// Value of a named column
    pub fn get(&self, column: &str) -> Option<f64> {
        column_index(column).map(|i| self.values[i])
    }

    /// Single-precision copy for the model runtime
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|&v| v as f32).collect()
    }

    /// Column name and value pairs, in order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        COLUMNS.iter().copied().zip(self.values.iter().copied())
    }
}

/// Encodes housing records using a shared, pre-fitted scaler
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    scaler: Arc<Scaler>,
}

impl FeatureEncoder {
    /// Create an encoder around a loaded scaler
    pub fn new(scaler: Arc<Scaler>) -> Self {
        Self { scaler }
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /// Defaults, one-hot groups and column ordering, without scaling
    pub fn encode_unscaled(&self, record: &HouseFeatures) -> FeatureVector {
        let mut values = [0.0; FEATURE_DIMENSION];
        values[..BASE_FEATURES].copy_from_slice(&record.base_values());

        let city = City::from_name(record.city_name());
        if city == City::Other && record.city_name() != City::Other.as_str() {
            debug!("Unknown city {:?}, encoding as Other", record.city_name());
        }
        values[city.column()] = 1.0;

        let seller = SellerType::from_name(record.seller_name());
        if seller == SellerType::Owner && record.seller_name() != SellerType::Owner.as_str() {
            debug!("Unknown seller type {:?}, encoding as Owner", record.seller_name());
        }
        values[seller.column()] = 1.0;

        FeatureVector { values }
    }

    /// Full encoding: [`Self::encode_unscaled`] followed by the scaler
    pub fn encode(&self, record: &HouseFeatures) -> FeatureVector {
        self.scaler.transform(&self.encode_unscaled(record))
    }
}
