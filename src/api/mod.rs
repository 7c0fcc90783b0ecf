//! Task Collection Client
//!
//! HTTP access to the `/api/tasks` resource, behind a trait so the
//! controller can be driven by test doubles.

mod fetch;

pub use fetch::FetchTaskApi;

use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

/// CRUD operations against the remote task collection
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// `GET {base}`
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `POST {base}` with `{title, description}`; the list is reloaded
    /// afterwards, so the response body is not read
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError>;

    /// `PUT {base}/{id}` with the patch fields; only the status is checked
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<(), ApiError>;

    /// `DELETE {base}/{id}`
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}
