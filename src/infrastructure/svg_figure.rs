// SVG rendering of chart figures with plotters
use crate::domain::chart_style::ChartStyle;
use crate::domain::figure::Figure;
use crate::infrastructure::config::FigureSize;
use plotters::prelude::*;
use thiserror::Error;

const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);
const BAR_HALF_WIDTH: f64 = 0.35;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("figure '{0}' has no points to draw")]
    NoPoints(String),
    #[error("failed to draw figure: {0}")]
    Draw(String),
}

fn draw_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Draw a figure as a standalone SVG document.
///
/// Timestamps are placed at integer x positions and labelled with their text,
/// so uneven spacing between samples is not reflected on the axis.
pub fn render_svg(figure: &Figure, size: FigureSize) -> Result<String, RenderError> {
    if figure.x.is_empty() || figure.y.is_empty() {
        return Err(RenderError::NoPoints(figure.title.clone()));
    }

    let count = figure.y.len();
    let labels = &figure.x;
    let (y_min, y_max) = value_range(&figure.y, figure.style == ChartStyle::Bar);

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (size.width, size.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, ("sans-serif", 22).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(count as f64 - 0.5), y_min..y_max)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count.min(10))
            .y_labels(8)
            .x_label_formatter(&|x| label_at(labels, *x))
            .x_desc(figure.x_axis)
            .y_desc(figure.y_axis)
            .draw()
            .map_err(draw_error)?;

        let points = figure.y.iter().enumerate().map(|(i, y)| (i as f64, *y));
        match figure.style {
            ChartStyle::Line => chart
                .draw_series(LineSeries::new(points, SERIES_COLOR.stroke_width(2)))
                .map_err(draw_error)?,
            ChartStyle::Bar => chart
                .draw_series(points.map(|(x, y)| {
                    Rectangle::new(
                        [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, y)],
                        SERIES_COLOR.filled(),
                    )
                }))
                .map_err(draw_error)?,
            ChartStyle::Scatter => chart
                .draw_series(points.map(|(x, y)| Circle::new((x, y), 4, SERIES_COLOR.filled())))
                .map_err(draw_error)?,
        };

        root.present().map_err(draw_error)?;
    }

    Ok(buffer)
}

fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Y axis range with a 5% margin. Bars always include the zero baseline.
fn value_range(values: &[f64], include_zero: bool) -> (f64, f64) {
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    let span = max - min;
    let margin = if span.abs() < 1e-10 {
        max.abs() * 0.05 + 0.1
    } else {
        span * 0.05
    };

    (min - margin, max + margin)
}
