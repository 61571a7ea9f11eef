//! Partial Input Record

use serde::{Deserialize, Serialize};

/// Literal defaults for absent fields
///
/// LONGITUDE and LATITUDE look swapped relative to their names. They match
/// the training data as-is and must not be "corrected".
pub mod defaults {
    pub const UNDER_CONSTRUCTION: i64 = 0;
    pub const RERA: i64 = 1;
    pub const BHK_NO: i64 = 3;
    pub const SQUARE_FT: f64 = 1000.0;
    pub const READY_TO_MOVE: i64 = 1;
    pub const RESALE: i64 = 1;
    pub const LONGITUDE: f64 = 12.9716;
    pub const LATITUDE: f64 = 77.5946;
    pub const CITY: &str = "Bangalore";
    pub const SELLER_TYPE: &str = "Builder";
}

/// Housing record where every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseFeatures {
    #[serde(rename = "UNDER_CONSTRUCTION", default)]
    pub under_construction: Option<i64>,
    #[serde(rename = "RERA", default)]
    pub rera: Option<i64>,
    #[serde(rename = "BHK_NO", default)]
    pub bhk_no: Option<i64>,
    #[serde(rename = "SQUARE_FT", default)]
    pub square_ft: Option<f64>,
    #[serde(rename = "READY_TO_MOVE", default)]
    pub ready_to_move: Option<i64>,
    #[serde(rename = "RESALE", default)]
    pub resale: Option<i64>,
    #[serde(rename = "LONGITUDE", default)]
    pub longitude: Option<f64>,
    #[serde(rename = "LATITUDE", default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub seller_type: Option<String>,
}

impl HouseFeatures {
    /// Record with only the fields the prediction endpoint requires
    pub fn new(bhk_no: i64, square_ft: f64, city: &str, seller_type: &str) -> Self {
        Self {
            bhk_no: Some(bhk_no),
            square_ft: Some(square_ft),
            city: Some(city.to_string()),
            seller_type: Some(seller_type.to_string()),
            ..Default::default()
        }
    }

    /// Base columns in model order with defaults applied
    pub fn base_values(&self) -> [f64; 8] {
        [
            self.under_construction.unwrap_or(defaults::UNDER_CONSTRUCTION) as f64,
            self.rera.unwrap_or(defaults::RERA) as f64,
            self.bhk_no.unwrap_or(defaults::BHK_NO) as f64,
            self.square_ft.unwrap_or(defaults::SQUARE_FT),
            self.ready_to_move.unwrap_or(defaults::READY_TO_MOVE) as f64,
            self.resale.unwrap_or(defaults::RESALE) as f64,
            self.longitude.unwrap_or(defaults::LONGITUDE),
            self.latitude.unwrap_or(defaults::LATITUDE),
        ]
    }

    /// City name, defaulted
    pub fn city_name(&self) -> &str {
        self.city.as_deref().unwrap_or(defaults::CITY)
    }

    /// Seller type name, defaulted
    pub fn seller_name(&self) -> &str {
        self.seller_type.as_deref().unwrap_or(defaults::SELLER_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_uses_defaults() {
        let record = HouseFeatures::default();
        assert_eq!(
            record.base_values(),
            [0.0, 1.0, 3.0, 1000.0, 1.0, 1.0, 12.9716, 77.5946]
        );
        assert_eq!(record.city_name(), "Bangalore");
        assert_eq!(record.seller_name(), "Builder");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let record: HouseFeatures =
            serde_json::from_str(r#"{"BHK_NO": 2, "RERA": 0, "city": "Noida"}"#).unwrap();
        assert_eq!(record.bhk_no, Some(2));
        assert_eq!(record.rera, Some(0));
        assert_eq!(record.square_ft, None);
        assert_eq!(record.city_name(), "Noida");
        assert_eq!(record.seller_name(), "Builder");
    }
}
