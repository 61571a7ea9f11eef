//! Prediction Wire Types
//!
//! JSON body accepted by `POST /predict` and the response it returns.
//! Shared by the server and the client so both sides agree on field names.

use serde::{Deserialize, Serialize};

use crate::record::{defaults, HouseFeatures};

fn default_under_construction() -> i64 {
    defaults::UNDER_CONSTRUCTION
}

fn default_rera() -> i64 {
    defaults::RERA
}

fn default_ready_to_move() -> i64 {
    defaults::READY_TO_MOVE
}

fn default_resale() -> i64 {
    defaults::RESALE
}

fn default_longitude() -> f64 {
    defaults::LONGITUDE
}

fn default_latitude() -> f64 {
    defaults::LATITUDE
}

/// Prediction request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "BHK_NO")]
    pub bhk_no: i64,
    #[serde(rename = "SQUARE_FT")]
    pub square_ft: f64,
    pub city: String,
    pub seller_type: String,
    #[serde(rename = "UNDER_CONSTRUCTION", default = "default_under_construction")]
    pub under_construction: i64,
    #[serde(rename = "RERA", default = "default_rera")]
    pub rera: i64,
    #[serde(rename = "READY_TO_MOVE", default = "default_ready_to_move")]
    pub ready_to_move: i64,
    #[serde(rename = "RESALE", default = "default_resale")]
    pub resale: i64,
    #[serde(rename = "LONGITUDE", default = "default_longitude")]
    pub longitude: f64,
    #[serde(rename = "LATITUDE", default = "default_latitude")]
    pub latitude: f64,
}

impl PredictRequest {
    /// Request with the required fields set and every optional field defaulted
    pub fn new(bhk_no: i64, square_ft: f64, city: impl Into<String>, seller_type: impl Into<String>) -> Self {
        Self {
            bhk_no,
            square_ft,
            city: city.into(),
            seller_type: seller_type.into(),
            under_construction: defaults::UNDER_CONSTRUCTION,
            rera: defaults::RERA,
            ready_to_move: defaults::READY_TO_MOVE,
            resale: defaults::RESALE,
            longitude: defaults::LONGITUDE,
            latitude: defaults::LATITUDE,
        }
    }
}

impl From<PredictRequest> for HouseFeatures {
    fn from(req: PredictRequest) -> Self {
        HouseFeatures {
            under_construction: Some(req.under_construction),
            rera: Some(req.rera),
            bhk_no: Some(req.bhk_no),
            square_ft: Some(req.square_ft),
            ready_to_move: Some(req.ready_to_move),
            resale: Some(req.resale),
            longitude: Some(req.longitude),
            latitude: Some(req.latitude),
            city: Some(req.city),
            seller_type: Some(req.seller_type),
        }
    }
}

/// Prediction response body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted price in Lakhs
    pub predicted_price_lacs: f64,
}
