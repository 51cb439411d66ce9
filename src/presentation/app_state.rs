// Application state for HTTP handlers
use crate::application::catalog_repository::CatalogRepository;
use crate::application::chart_service::ChartService;
use crate::application::selection_service::SelectionService;
use crate::domain::granularity::Granularity;
use crate::infrastructure::config::FigureSize;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub title: String,
    pub figure_size: FigureSize,
    pub selection_service: SelectionService,
    pub chart_service: ChartService,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        granularity: Granularity,
        title: String,
        figure_size: FigureSize,
    ) -> Self {
        Self {
            title,
            figure_size,
            selection_service: SelectionService::new(repository.clone()),
            chart_service: ChartService::new(repository, granularity),
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.chart_service.granularity()
    }
}
