use serde::{Deserialize, Serialize};

/// A single tracked task.
///
/// The id is assigned by the store on creation and is never reused
/// within a process lifetime, even after the task is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Creation payload. `title` stays optional at the serde level so that
/// a missing field reaches validation instead of failing
/// deserialization with a generic 422.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial update. Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    pub fn new(id: u64, title: String, description: Option<String>) -> Self {
        Task {
            id,
            title,
            description,
            completed: false,
        }
    }

    /// Merge an update into this task. The id is immutable; only title,
    /// description and completed can change.
    pub fn apply(&mut self, update: &TaskUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}
