//! Column Schema
//!
//! The model and the scaler were fitted on columns in exactly this order.
//! Scaler artifacts carry [`SCHEMA_VERSION`] and the column list so a
//! reordered artifact is rejected at load time instead of silently skewing
//! predictions.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Version of the column layout below. Bump on any change to [`COLUMNS`].
pub const SCHEMA_VERSION: u32 = 1;

/// Number of columns in the model input
pub const FEATURE_DIMENSION: usize = 22;

/// Number of numeric/boolean columns preceding the one-hot groups
pub const BASE_FEATURES: usize = 8;

/// City indicator columns
pub const CITY_RANGE: Range<usize> = 8..19;

/// Seller type indicator columns
pub const SELLER_RANGE: Range<usize> = 19..22;

/// Column names in model order
pub const COLUMNS: [&str; FEATURE_DIMENSION] = [
    "UNDER_CONSTRUCTION",
    "RERA",
    "BHK_NO.",
    "SQUARE_FT",
    "READY_TO_MOVE",
    "RESALE",
    "LONGITUDE",
    "LATITUDE",
    "Bangalore",
    "Chennai",
    "Ghaziabad",
    "Jaipur",
    "Kolkata",
    "Lalitpur",
    "Maharashtra",
    "Mumbai",
    "Noida",
    "Other",
    "Pune",
    "Builder",
    "Dealer",
    "Owner",
];

/// Index of a column by name
pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| *c == name)
}

/// City category seen at training time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Bangalore,
    Chennai,
    Ghaziabad,
    Jaipur,
    Kolkata,
    Lalitpur,
    Maharashtra,
    Mumbai,
    Noida,
    Other,
    Pune,
}

impl City {
    /// All cities in column order
    pub const ALL: [City; 11] = [
        City::Bangalore,
        City::Chennai,
        City::Ghaziabad,
        City::Jaipur,
        City::Kolkata,
        City::Lalitpur,
        City::Maharashtra,
        City::Mumbai,
        City::Noida,
        City::Other,
        City::Pune,
    ];

    /// Column name of this city
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Bangalore => "Bangalore",
            City::Chennai => "Chennai",
            City::Ghaziabad => "Ghaziabad",
            City::Jaipur => "Jaipur",
            City::Kolkata => "Kolkata",
            City::Lalitpur => "Lalitpur",
            City::Maharashtra => "Maharashtra",
            City::Mumbai => "Mumbai",
            City::Noida => "Noida",
            City::Other => "Other",
            City::Pune => "Pune",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn parse(name: &str) -> Option<City> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// Lenient lookup: anything unrecognised is `Other`
    pub fn from_name(name: &str) -> City {
        Self::parse(name).unwrap_or(City::Other)
    }

    /// Position of this city's indicator in the feature vector
    pub fn column(&self) -> usize {
        CITY_RANGE.start + *self as usize
    }
}

/// Who is listing the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellerType {
    Builder,
    Dealer,
    Owner,
}

impl SellerType {
    /// All seller types in column order
    pub const ALL: [SellerType; 3] = [SellerType::Builder, SellerType::Dealer, SellerType::Owner];

    pub fn as_str(&self) -> &'static str {
        match self {
            SellerType::Builder => "Builder",
            SellerType::Dealer => "Dealer",
            SellerType::Owner => "Owner",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn parse(name: &str) -> Option<SellerType> {
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    /// Lenient lookup: anything unrecognised is `Owner`
    pub fn from_name(name: &str) -> SellerType {
        Self::parse(name).unwrap_or(SellerType::Owner)
    }

    /// Position of this seller type's indicator in the feature vector
    pub fn column(&self) -> usize {
        SELLER_RANGE.start + *self as usize
    }
}
