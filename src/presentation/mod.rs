// Presentation layer - HTTP handlers and the server-rendered page
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod shell;
