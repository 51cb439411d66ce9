// Domain layer - Catalog entities and pure chart logic
pub mod catalog;
pub mod chart_style;
pub mod figure;
pub mod granularity;
pub mod range_filter;
pub mod time_series;
