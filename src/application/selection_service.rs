// Selection service - Use case for populating the factory and device dropdowns
use crate::application::catalog_repository::CatalogRepository;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: u32,
}

impl SelectOption {
    pub fn new(label: &str, value: u32) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Clone)]
pub struct SelectionService {
    repository: Arc<dyn CatalogRepository>,
}

impl SelectionService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn factory_options(&self) -> anyhow::Result<Vec<SelectOption>> {
        let factories = self.repository.list_factories().await?;
        Ok(factories
            .iter()
            .map(|f| SelectOption::new(&f.title, f.id))
            .collect())
    }

    /// Devices belonging to the selected factory. No selection yields no options.
    pub async fn device_options(&self, factory_id: Option<u32>) -> anyhow::Result<Vec<SelectOption>> {
        let Some(factory_id) = factory_id else {
            return Ok(Vec::new());
        };

        let devices = self.repository.devices_for_factory(factory_id).await?;
        Ok(devices
            .iter()
            .map(|d| SelectOption::new(&d.title, d.id))
            .collect())
    }
}
