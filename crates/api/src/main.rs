//! Housing Price Server - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, AppState, ServerConfig};
use inference_engine::PricePredictor;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("failed to load configuration")?;
    init_logging(&config.log_level, config.log_json)?;

    info!("=== Housing Price Server v{} ===", env!("CARGO_PKG_VERSION"));

    let predictor = PricePredictor::from_artifacts(&config.model_path, &config.scaler_path)
        .context("failed to load model artifacts")?;

    let mut state = AppState::new(predictor);
    if config.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("failed to install metrics recorder")?;
        state = state.with_metrics(handle);
    }

    run_server(&config.bind_addr, Arc::new(state)).await?;

    Ok(())
}
