//! Feature Encoding Engine
//!
//! Turns a sparse housing record into the fixed 22-column vector the price
//! model was trained on, then applies the pre-fitted scaling transform.

mod encoder;
mod error;
mod record;
pub mod request;
mod scaler;
pub mod schema;

pub use encoder::{FeatureEncoder, FeatureVector};
pub use error::FeatureError;
pub use record::{defaults, HouseFeatures};
pub use request::{PredictRequest, PredictResponse};
pub use scaler::{Scaler, ScalingMethod};
pub use schema::{City, SellerType, COLUMNS, FEATURE_DIMENSION, SCHEMA_VERSION};
