//! Client Error Types

use thiserror::Error;

/// Errors surfaced to the user
#[derive(Debug, Error)]
pub enum ClientError {
    /// Service unreachable or timed out
    #[error("Could not reach the prediction service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a body that is not a prediction
    #[error("Prediction service sent an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Prediction service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Market data file could not be read
    #[error("Market data error: {0}")]
    MarketData(#[from] csv::Error),
}
