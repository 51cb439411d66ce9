// Application layer - Use cases over the catalog
pub mod catalog_repository;
pub mod chart_service;
pub mod selection_service;
