//! Prediction Routes

use axum::{extract::State, Json};
use feature_engine::{HouseFeatures, PredictRequest, PredictResponse};
use metrics::{counter, histogram};
use std::sync::Arc;
use tracing::{debug, error};

use crate::{ApiError, AppState};

/// Predict the price of one property
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(
        "Predict request: bhk={}, sqft={}, city={}, seller={}",
        request.bhk_no, request.square_ft, request.city, request.seller_type
    );

    let record: HouseFeatures = request.into();
    match state.predictor.predict(&record) {
        Ok(estimate) => {
            counter!("housing_predictions_total").increment(1);
            histogram!("housing_prediction_latency_ms").record(estimate.latency_us as f64 / 1000.0);
            Ok(Json(PredictResponse {
                predicted_price_lacs: estimate.price_lacs,
            }))
        }
        Err(e) => {
            counter!("housing_prediction_errors_total").increment(1);
            error!("Prediction failed: {}", e);
            Err(e.into())
        }
    }
}
