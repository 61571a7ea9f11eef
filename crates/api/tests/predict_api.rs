//! HTTP tests against a server bound to an ephemeral port

use api::{serve, AppState};
use feature_engine::{
    FeatureEncoder, FeatureVector, PredictRequest, PredictResponse, Scaler, FEATURE_DIMENSION,
};
use inference_engine::{InferenceError, LinearRegressor, PricePredictor, Regressor};
use serde_json::{json, Value};
use std::sync::Arc;

/// Price = 0.05 * SQUARE_FT + 5 * BHK + 20 * Mumbai + 2 * Other
fn predictor() -> PricePredictor {
    let mut coefficients = vec![0.0; FEATURE_DIMENSION];
    coefficients[2] = 5.0;
    coefficients[3] = 0.05;
    coefficients[15] = 20.0;
    coefficients[17] = 2.0;
    let model = LinearRegressor::new(coefficients, 0.0).unwrap();
    PricePredictor::new(FeatureEncoder::new(Arc::new(Scaler::identity())), Arc::new(model))
}

/// Model that always produces NaN
struct NanModel;

impl Regressor for NanModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
        Ok(f64::NAN)
    }

    fn name(&self) -> &str {
        "nan"
    }
}

async fn spawn_server() -> String {
    spawn_server_with(predictor()).await
}

async fn spawn_server_with(predictor: PricePredictor) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(predictor));
    tokio::spawn(async move {
        serve(listener, state).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_predict_returns_price() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .json(&PredictRequest::new(3, 1000.0, "Mumbai", "Builder"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: PredictResponse = response.json().await.unwrap();
    assert!((body.predicted_price_lacs - 85.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_versioned_route_and_optional_defaults() {
    let base = spawn_server().await;
    let body = json!({"BHK_NO": 2, "SQUARE_FT": 500, "city": "Pune", "seller_type": "Owner"});
    let response = reqwest::Client::new()
        .post(format!("{}/api/v1/predict", base))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let price = body["predicted_price_lacs"].as_f64().unwrap();
    assert!((price - 35.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_unknown_city_is_accepted() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .json(&PredictRequest::new(1, 0.0, "Atlantis", "Wizard"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: PredictResponse = response.json().await.unwrap();
    assert!((body.predicted_price_lacs - 7.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .json(&json!({"BHK_NO": 2, "city": "Pune", "seller_type": "Owner"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server().await;
    let body: Value = reqwest::get(format!("{}/api/v1/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "linear");
    assert_eq!(body["scaler"], "identity");
    assert_eq!(body["schema_version"], 1);
}

#[tokio::test]
async fn test_metrics_disabled() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{}/api/v1/metrics", base)).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_inference_failure_returns_500_with_detail() {
    let predictor = PricePredictor::new(
        FeatureEncoder::new(Arc::new(Scaler::identity())),
        Arc::new(NanModel),
    );
    let base = spawn_server_with(predictor).await;
    let response = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .json(&PredictRequest::new(3, 1000.0, "Pune", "Owner"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("non-finite"), "{}", detail);
}
