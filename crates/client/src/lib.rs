//! Housing Price Client
//!
//! Collects property details, sends them to the prediction service and
//! renders the returned price.

mod client;
mod display;
mod error;
mod form;
mod market;

pub use client::{PredictionClient, DEFAULT_TIMEOUT};
pub use display::{PriceDisplay, MIN_DISPLAY_PRICE_LACS};
pub use error::ClientError;
pub use form::{GeoPoint, PropertyForm};
pub use market::{MarketComparison, MarketData};
