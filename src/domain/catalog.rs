// Catalog domain model: factories, their devices and the devices' charts
use super::granularity::Granularity;
use super::time_series::{SeriesError, TimeSeries};

#[derive(Debug, Clone, PartialEq)]
pub struct Factory {
    pub id: u32,
    pub title: String,
}

impl Factory {
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: u32,
    pub title: String,
    pub factory_id: u32,
}

impl Device {
    pub fn new(id: u32, title: &str, factory_id: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            factory_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: u32,
    pub title: String,
    pub device_id: u32,
    pub series: TimeSeries,
}

impl Chart {
    pub fn new(id: u32, title: &str, device_id: u32, series: TimeSeries) -> Self {
        Self {
            id,
            title: title.to_string(),
            device_id,
            series,
        }
    }
}

/// Read-only collection built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    factories: Vec<Factory>,
    devices: Vec<Device>,
    charts: Vec<Chart>,
}

impl Catalog {
    pub fn new(factories: Vec<Factory>, devices: Vec<Device>, charts: Vec<Chart>) -> Self {
        Self {
            factories,
            devices,
            charts,
        }
    }

    /// The demo plant data, with timestamps in the variant's format.
    pub fn builtin(granularity: Granularity) -> Result<Self, SeriesError> {
        let timestamps: Vec<String> = match granularity {
            Granularity::Date => vec!["2023-01-01", "2023-01-02", "2023-01-03"],
            Granularity::DateTime => vec![
                "2023-01-01 08:00:00",
                "2023-01-01 12:00:00",
                "2023-01-01 16:00:00",
            ],
        }
        .into_iter()
        .map(String::from)
        .collect();

        let series = |values: [f64; 3]| TimeSeries::new(timestamps.clone(), values.to_vec());

        let factories = vec![Factory::new(1, "Factory 1"), Factory::new(2, "Factory 2")];
        let devices = vec![
            Device::new(1, "Device 1", 1),
            Device::new(2, "Device 2", 1),
            Device::new(3, "Device 3", 2),
        ];
        let charts = vec![
            Chart::new(1, "Температура", 1, series([10.0, 20.0, 30.0])?),
            Chart::new(2, "Давление", 1, series([5.0, 15.0, 25.0])?),
            Chart::new(3, "Скорость", 3, series([100.0, 200.0, 300.0])?),
            Chart::new(4, "Вибрация", 2, series([0.4, 0.7, 0.5])?),
        ];

        Ok(Self::new(factories, devices, charts))
    }

    pub fn factories(&self) -> &[Factory] {
        &self.factories
    }

    pub fn devices_of(&self, factory_id: u32) -> impl Iterator<Item = &Device> + '_ {
        self.devices.iter().filter(move |d| d.factory_id == factory_id)
    }

    pub fn charts_of(&self, device_id: u32) -> impl Iterator<Item = &Chart> + '_ {
        self.charts.iter().filter(move |c| c.device_id == device_id)
    }

    pub fn chart(&self, chart_id: u32) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == chart_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin(Granularity::Date).unwrap();

        assert_eq!(catalog.factories().len(), 2);
        let titles: Vec<_> = catalog.devices_of(1).map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Device 1", "Device 2"]);
        assert_eq!(catalog.devices_of(3).count(), 0);

        let charts: Vec<_> = catalog.charts_of(1).map(|c| c.title.as_str()).collect();
        assert_eq!(charts, vec!["Температура", "Давление"]);
        assert!(catalog.charts_of(1).all(|c| c.series.len() == 3));
    }

    #[test]
    fn test_builtin_timestamps_follow_granularity() {
        for granularity in [Granularity::Date, Granularity::DateTime] {
            let catalog = Catalog::builtin(granularity).unwrap();
            let chart = catalog.chart(3).unwrap();
            assert_eq!(chart.device_id, 3);
            assert!(
                chart
                    .series
                    .timestamps()
                    .iter()
                    .all(|t| granularity.parse(t).is_ok())
            );
        }
    }

    #[test]
    fn test_lookups_miss_cleanly() {
        let catalog = Catalog::builtin(Granularity::Date).unwrap();
        assert_eq!(catalog.devices_of(99).count(), 0);
        assert!(catalog.chart(99).is_none());
        assert_eq!(catalog.charts_of(99).count(), 0);
    }
}
