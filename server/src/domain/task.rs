//! Task Entity
//!
//! A titled, optionally described, completable to-do item.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

pub const TITLE_REQUIRED: &str = "Title is required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the database
    pub id: u32,
    /// Never blank once persisted
    pub title: String,
    /// Empty when the task has no description
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create a task that has not been persisted yet
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: 0,
            title,
            description: description.into(),
            completed: false,
        })
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn apply(self, task: &mut Task) -> DomainResult<()> {
        if let Some(title) = self.title {
            validate_title(&title)?;
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidInput(TITLE_REQUIRED.to_string()));
    }
    Ok(())
}
