//! Taskboard Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - api: HTTP handlers for the `/api/tasks` collection

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;

pub use api::{create_router, AppState};
pub use config::ServerConfig;
