//! Property Input Form

use feature_engine::PredictRequest;
use serde::{Deserialize, Serialize};

/// A point picked on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Initial map centre (Bangalore)
    pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
        lat: 12.9716,
        lon: 77.5946,
    };
}

/// Everything the user enters before pressing predict
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub bhk: i64,
    pub square_ft: f64,
    pub city: String,
    pub seller_type: String,
    pub under_construction: bool,
    pub rera: bool,
    pub ready_to_move: bool,
    pub resale: bool,
    /// Picked location, `None` until the user clicks the map
    pub location: Option<GeoPoint>,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            bhk: 2,
            square_ft: 1000.0,
            city: "Bangalore".to_string(),
            seller_type: "Builder".to_string(),
            under_construction: false,
            rera: true,
            ready_to_move: true,
            resale: true,
            location: None,
        }
    }
}

impl PropertyForm {
    /// Location that will be sent: the picked point or the map centre
    pub fn effective_location(&self) -> GeoPoint {
        self.location.unwrap_or(GeoPoint::DEFAULT_CENTER)
    }

    /// Build the wire request
    ///
    /// The model was trained with the two coordinate columns swapped, so
    /// the picked latitude goes into `LONGITUDE` and the longitude into
    /// `LATITUDE`.
    pub fn to_request(&self) -> PredictRequest {
        let point = self.effective_location();
        let mut request = PredictRequest::new(
            self.bhk,
            self.square_ft,
            self.city.clone(),
            self.seller_type.clone(),
        );
        request.under_construction = self.under_construction as i64;
        request.rera = self.rera as i64;
        request.ready_to_move = self.ready_to_move as i64;
        request.resale = self.resale as i64;
        request.latitude = point.lon;
        request.longitude = point.lat;
        request
    }
}
