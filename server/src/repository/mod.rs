//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod task_repo;
mod traits;


pub use db::{init_db, DbState};
pub use task_repo::TaskRepository;
pub use traits::Repository;
