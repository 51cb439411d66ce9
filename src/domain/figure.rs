// Renderable figure for one chart
use super::chart_style::ChartStyle;
use super::time_series::TimeSeries;
use serde::Serialize;

pub const X_AXIS_LABEL: &str = "Time";
pub const Y_AXIS_LABEL: &str = "Value";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub chart_id: u32,
    pub title: String,
    pub style: ChartStyle,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
}

impl Figure {
    pub fn build(chart_id: u32, title: &str, series: &TimeSeries) -> Self {
        Self {
            chart_id,
            title: title.to_string(),
            style: ChartStyle::for_chart(chart_id),
            x: series.timestamps().to_vec(),
            y: series.values().to_vec(),
            x_axis: X_AXIS_LABEL,
            y_axis: Y_AXIS_LABEL,
        }
    }
}
