use taskboard_model::{NewTask, TaskUpdate};
use tracing::warn;

use crate::{api::TasksApi, view};

/// Surface the manager renders into and raises dialogs on. A browser
/// binding implements this over the real page; tests use a recording
/// double.
pub trait UserInterface {
    fn set_tasks_html(&self, html: &str);
    fn reset_form(&self);
    fn alert(&self, message: &str);
    fn confirm(&self, prompt: &str) -> bool;
}

/// Translates user intent into store calls and keeps the rendered list
/// synchronized by re-fetching after every mutation. Holds no task
/// state of its own.
pub struct TaskManager<U> {
    api: TasksApi,
    ui: U,
}

impl<U: UserInterface> TaskManager<U> {
    pub fn new(api: TasksApi, ui: U) -> Self {
        TaskManager { api, ui }
    }

    /// Create a task from form input. An all-whitespace title is
    /// dropped without a network call; the form keeps its contents on
    /// failure so the user can retry.
    pub async fn submit_new_task(&self, title: &str, description: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        let description = description.trim();
        let new_task = NewTask {
            title: Some(title.to_string()),
            description: (!description.is_empty()).then(|| description.to_string()),
        };
        match self.api.create_task(&new_task).await {
            Ok(_) => {
                self.ui.reset_form();
                self.refresh_list().await;
            }
            Err(error) => {
                warn!(%error, "create failed");
                self.ui.alert("Failed to create task");
            }
        }
    }

    /// Fetch the full list and re-render it, showing a loading
    /// placeholder while the request is in flight. A failed fetch
    /// replaces the list content; there is no automatic retry.
    pub async fn refresh_list(&self) {
        self.ui.set_tasks_html(&view::loading());
        match self.api.fetch_tasks().await {
            Ok(tasks) => self.ui.set_tasks_html(&view::render_tasks(&tasks)),
            Err(error) => {
                warn!(%error, "list fetch failed");
                self.ui.set_tasks_html(&view::load_failed());
            }
        }
    }

    /// Flip a task's completed flag against the freshly fetched list.
    /// A task that disappeared between render and click is silently
    /// skipped.
    pub async fn toggle_completion(&self, id: u64) {
        let tasks = match self.api.fetch_tasks().await {
            Ok(tasks) => tasks,
            Err(error) => {
                warn!(%error, "list fetch failed");
                self.ui.alert("Failed to update task");
                return;
            }
        };
        let Some(task) = tasks.iter().find(|task| task.id == id) else {
            return;
        };
        let update = TaskUpdate {
            completed: Some(!task.completed),
            ..TaskUpdate::default()
        };
        match self.api.update_task(id, &update).await {
            Ok(_) => self.refresh_list().await,
            Err(error) => {
                warn!(%error, "update failed");
                self.ui.alert("Failed to update task");
            }
        }
    }

    /// Delete a task after explicit confirmation.
    pub async fn delete_task_interactive(&self, id: u64) {
        if !self.ui.confirm("Are you sure you want to delete this task?") {
            return;
        }
        match self.api.delete_task(id).await {
            Ok(()) => self.refresh_list().await,
            Err(error) => {
                warn!(%error, "delete failed");
                self.ui.alert("Failed to delete task");
            }
        }
    }
}
