//! Web API module
//!
//! `/api/tasks` routes plus static serving of the built front end.

mod error;
mod handlers;

#[cfg(test)]
mod tests;

pub use error::ApiError;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::repository::{DbState, TaskRepository};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<TaskRepository>,
}

impl AppState {
    pub fn new(db: &DbState) -> Self {
        Self {
            tasks: Arc::new(TaskRepository::new(db.conn.clone())),
        }
    }
}

/// Create the API router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/tasks/{id}", put(handlers::update_task).delete(handlers::delete_task))
}

/// Create the full router with static file serving
pub fn create_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest("/api", create_api_router())
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            let index_file = dir.join("index.html");
            router.fallback_service(ServeDir::new(&dir).not_found_service(ServeFile::new(index_file)))
        }
        None => router,
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}
