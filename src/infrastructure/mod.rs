// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod in_memory_catalog;
pub mod svg_figure;
