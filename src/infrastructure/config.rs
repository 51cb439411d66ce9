use crate::domain::granularity::Granularity;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
    pub figure: FigureSize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub title: String,
    pub granularity: Granularity,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
        }
    }
}

/// Load settings from `config/dashboard.*` (optional) and `DASHBOARD_*` variables,
/// e.g. `DASHBOARD_DASHBOARD__GRANULARITY=datetime`.
pub fn load_settings() -> anyhow::Result<Settings> {
    build_settings(config::File::with_name("config/dashboard").required(false))
}

fn build_settings<S>(file: S) -> anyhow::Result<Settings>
where
    S: config::Source + Send + Sync + 'static,
{
    let defaults = FigureSize::default();
    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050)?
        .set_default("dashboard.title", "Test Dashboard")?
        .set_default("dashboard.granularity", "date")?
        .set_default("figure.width", i64::from(defaults.width))?
        .set_default("figure.height", i64::from(defaults.height))?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
