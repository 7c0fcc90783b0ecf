//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod task;

pub use entity::{DomainError, DomainResult, Entity};
pub use task::{Task, TaskUpdate, TITLE_REQUIRED};
