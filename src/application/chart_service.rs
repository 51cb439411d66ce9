// Chart service - Use case for building the chart panel of a device
use crate::application::catalog_repository::CatalogRepository;
use crate::domain::catalog::Chart;
use crate::domain::figure::Figure;
use crate::domain::granularity::Granularity;
use crate::domain::range_filter::{TimeRange, filter_series};
use serde::Serialize;
use std::sync::Arc;

pub const SELECT_DEVICE_MESSAGE: &str = "Select a device";
pub const NO_DEVICE_DATA_MESSAGE: &str = "No data for this device";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartOutcome {
    Rendered { figure: Figure },
    Empty { chart_id: u32, title: String, message: String },
}

impl ChartOutcome {
    fn empty(chart: &Chart) -> Self {
        ChartOutcome::Empty {
            chart_id: chart.id,
            title: chart.title.clone(),
            message: format!("No data for chart '{}' in the selected range", chart.title),
        }
    }

    #[cfg(test)]
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            ChartOutcome::Rendered { figure } => Some(figure),
            ChartOutcome::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPanel {
    NoDevice { message: &'static str },
    NoCharts { message: &'static str },
    Charts { charts: Vec<ChartOutcome> },
}

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn CatalogRepository>,
    granularity: Granularity,
}

impl ChartService {
    pub fn new(repository: Arc<dyn CatalogRepository>, granularity: Granularity) -> Self {
        Self {
            repository,
            granularity,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub async fn build_panel(
        &self,
        device_id: Option<u32>,
        range: Option<&TimeRange>,
    ) -> anyhow::Result<ChartPanel> {
        let Some(device_id) = device_id else {
            return Ok(ChartPanel::NoDevice {
                message: SELECT_DEVICE_MESSAGE,
            });
        };

        let charts = self.repository.charts_for_device(device_id).await?;
        if charts.is_empty() {
            tracing::debug!(device_id, "Device has no charts");
            return Ok(ChartPanel::NoCharts {
                message: NO_DEVICE_DATA_MESSAGE,
            });
        }

        let outcomes = charts
            .iter()
            .map(|chart| self.chart_outcome(chart, range))
            .collect();

        Ok(ChartPanel::Charts { charts: outcomes })
    }

    /// Outcome for a single chart, or `None` when the chart does not exist.
    pub async fn chart(
        &self,
        chart_id: u32,
        range: Option<&TimeRange>,
    ) -> anyhow::Result<Option<ChartOutcome>> {
        let chart = self.repository.find_chart(chart_id).await?;
        Ok(chart.map(|c| self.chart_outcome(&c, range)))
    }

    fn chart_outcome(&self, chart: &Chart, range: Option<&TimeRange>) -> ChartOutcome {
        let filtered = filter_series(&chart.series, range, self.granularity);

        tracing::debug!(
            chart_id = chart.id,
            points = filtered.len(),
            x = ?filtered.timestamps(),
            y = ?filtered.values(),
            "Filtered chart series"
        );

        if filtered.is_empty() {
            return ChartOutcome::empty(chart);
        }

        ChartOutcome::Rendered {
            figure: Figure::build(chart.id, &chart.title, &filtered),
        }
    }
}
