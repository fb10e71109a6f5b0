//! HTML fragments for the task list. The surrounding page, styling and
//! event wiring belong to whoever implements `UserInterface`; buttons
//! carry `data-action`/`data-id` attributes for that binding to hook.

use taskboard_model::Task;

pub fn loading() -> String {
    r#"<div class="loading">Loading tasks...</div>"#.to_string()
}

pub fn load_failed() -> String {
    r#"<div class="loading">Failed to load tasks</div>"#.to_string()
}

pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return r#"<div class="loading">No tasks yet. Add one above!</div>"#.to_string();
    }
    tasks.iter().map(render_task).collect()
}

fn render_task(task: &Task) -> String {
    let completed_class = if task.completed { " completed" } else { "" };
    let toggle_label = if task.completed { "Undo" } else { "Complete" };
    let description = task
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("<p>{}</p>", escape_html(d)))
        .unwrap_or_default();
    format!(
        r#"<div class="task-item{completed_class}">
    <div class="task-content">
        <h3>{title}</h3>
        {description}
    </div>
    <div class="task-actions">
        <button class="btn-complete" data-action="toggle" data-id="{id}">{toggle_label}</button>
        <button class="btn-delete" data-action="delete" data-id="{id}">Delete</button>
    </div>
</div>
"#,
        id = task.id,
        title = escape_html(&task.title),
    )
}

/// Simple HTML escaping for user content.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
