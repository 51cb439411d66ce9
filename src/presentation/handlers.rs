// HTTP request handlers
use crate::application::chart_service::ChartOutcome;
use crate::domain::range_filter::RangeInput;
use crate::infrastructure::http_response::{accepts_brotli, json_response, svg_response};
use crate::infrastructure::svg_figure::render_svg;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::page::DashboardPage;
use crate::presentation::shell::{ShellQuery, ShellState};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{Html, Response},
};
use maud::Render;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page. Every request recomputes the dropdowns and charts.
pub async fn dashboard_page(
    Query(query): Query<ShellQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let granularity = state.granularity();
    let factories = state.selection_service.factory_options().await?;
    let devices = state
        .selection_service
        .device_options(query.factory_id())
        .await?;

    let shell = ShellState::from_request(&query, &devices, granularity);
    tracing::debug!(state = ?shell, "Rendering dashboard");

    let panel = state
        .chart_service
        .build_panel(shell.device(), shell.range())
        .await?;

    let page = DashboardPage {
        title: &state.title,
        granularity,
        figure_size: state.figure_size,
        factories: &factories,
        devices: &devices,
        query: &query,
        state: &shell,
        panel: &panel,
    };
    Ok(Html(page.render().into_string()))
}

/// List all factories
pub async fn list_factories(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let options = state.selection_service.factory_options().await?;
    Ok(json_response(&options, accepts_brotli(&headers)).await?)
}

/// List the devices of a factory
pub async fn list_devices(
    Path(factory_id): Path<u32>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let options = state
        .selection_service
        .device_options(Some(factory_id))
        .await?;
    Ok(json_response(&options, accepts_brotli(&headers)).await?)
}

/// Chart panel of a device, filtered by the optional range
pub async fn device_charts(
    Path(device_id): Path<u32>,
    Query(range): Query<RangeInput>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let range = range.to_range(state.granularity());
    let panel = state
        .chart_service
        .build_panel(Some(device_id), range.as_ref())
        .await?;
    Ok(json_response(&panel, accepts_brotli(&headers)).await?)
}

/// Single chart rendered as SVG
pub async fn chart_figure(
    Path(chart_id): Path<u32>,
    Query(range): Query<RangeInput>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let range = range.to_range(state.granularity());
    let outcome = state
        .chart_service
        .chart(chart_id, range.as_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Chart {}", chart_id)))?;

    match outcome {
        ChartOutcome::Rendered { figure } => {
            let svg = render_svg(&figure, state.figure_size)?;
            Ok(svg_response(svg)?)
        }
        ChartOutcome::Empty { message, .. } => Err(ApiError::NoData(message)),
    }
}
