// Repository trait for catalog data access
use crate::domain::catalog::{Chart, Device, Factory};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all factories
    async fn list_factories(&self) -> anyhow::Result<Vec<Factory>>;

    /// Devices owned by a factory, in catalog order
    async fn devices_for_factory(&self, factory_id: u32) -> anyhow::Result<Vec<Device>>;

    /// Charts attached to a device, in catalog order
    async fn charts_for_device(&self, device_id: u32) -> anyhow::Result<Vec<Chart>>;

    async fn find_chart(&self, chart_id: u32) -> anyhow::Result<Option<Chart>>;
}
