// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_figure, dashboard_page, device_charts, health_check, list_devices, list_factories,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/factories", get(list_factories))
        .route("/api/factories/:id/devices", get(list_devices))
        .route("/api/devices/:id/charts", get(device_charts))
        .route("/api/charts/:id/figure.svg", get(chart_figure))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
