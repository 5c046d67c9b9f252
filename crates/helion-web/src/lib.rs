// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

pub mod chart;
pub mod demo;
pub mod routes;
pub mod store;

pub use store::{SampleStore, StoreError};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Application state shared across web handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<SampleStore>,
}

/// Build the API router over a sample store
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_handler))
        .route("/api/days", get(routes::days_handler))
        .route("/api/summary/day/{date}", get(routes::day_summary_handler))
        .route("/api/summary/week", get(routes::week_summary_handler))
        .route("/api/report/day/{date}", get(routes::day_report_handler))
        .route("/api/report/week", get(routes::week_report_handler))
        .route("/api/expansion", get(routes::expansion_handler))
        .route("/api/kpis", get(routes::kpis_handler))
        .route("/api/chart/day/{date}", get(routes::day_chart_handler))
        .route("/api/chart/week", get(routes::week_chart_handler))
        .route("/api/assistant", post(routes::assistant_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the web server and serve until shutdown
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while
/// serving.
pub async fn start_web_server(
    store: Arc<SampleStore>,
    bind_address: &str,
    port: u16,
) -> std::io::Result<()> {
    let app = router(AppState { store });
    let addr = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Helion API listening on {addr}");
    axum::serve(listener, app).await
}
