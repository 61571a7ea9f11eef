//! Price Display

use tracing::warn;

/// Lowest price shown to the user, in Lakhs
pub const MIN_DISPLAY_PRICE_LACS: f64 = 1.0;

/// A predicted price ready to show
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDisplay {
    /// Price to show, never below [`MIN_DISPLAY_PRICE_LACS`] when the model went negative
    pub price_lacs: f64,
    /// Raw model output
    pub raw_lacs: f64,
    /// Shown next to the price when it was clamped
    pub advisory: Option<String>,
}

impl PriceDisplay {
    pub fn from_prediction(raw_lacs: f64) -> Self {
        if raw_lacs < 0.0 {
            warn!("Clamping negative prediction {:.3} for display", raw_lacs);
            return Self {
                price_lacs: MIN_DISPLAY_PRICE_LACS,
                raw_lacs,
                advisory: Some(format!(
                    "The model predicted a negative price for these inputs; showing the minimum of ₹ {:.2} Lakhs instead. Try adjusting the area or location.",
                    MIN_DISPLAY_PRICE_LACS
                )),
            };
        }

        // -0.0 would otherwise render as "-0.00"
        let price_lacs = if raw_lacs == 0.0 { 0.0 } else { raw_lacs };
        Self {
            price_lacs,
            raw_lacs,
            advisory: None,
        }
    }

    pub fn is_clamped(&self) -> bool {
        self.advisory.is_some()
    }

    /// `₹ 45.20 Lakhs`
    pub fn formatted(&self) -> String {
        format!("₹ {:.2} Lakhs", self.price_lacs)
    }
}
