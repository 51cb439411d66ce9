// In-memory catalog repository implementation
use crate::application::catalog_repository::CatalogRepository;
use crate::domain::catalog::{Catalog, Chart, Device, Factory};
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_factories(&self) -> Result<Vec<Factory>> {
        Ok(self.catalog.factories().to_vec())
    }

    async fn devices_for_factory(&self, factory_id: u32) -> Result<Vec<Device>> {
        Ok(self.catalog.devices_of(factory_id).cloned().collect())
    }

    async fn charts_for_device(&self, device_id: u32) -> Result<Vec<Chart>> {
        Ok(self.catalog.charts_of(device_id).cloned().collect())
    }

    async fn find_chart(&self, chart_id: u32) -> Result<Option<Chart>> {
        Ok(self.catalog.chart(chart_id).cloned())
    }
}
