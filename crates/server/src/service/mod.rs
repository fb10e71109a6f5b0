use axum::{
    extract::{Path, State as AppState},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use taskboard_model::{NewTask, Task, TaskUpdate};
use tracing::info;

use crate::{service::error::ServiceError, state::Store};

mod error;

type Result<T> = std::result::Result<T, ServiceError>;

pub fn service(store: Store) -> Router {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .route("/health", get(health))
        .with_state(store)
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn list_tasks(AppState(store): AppState<Store>) -> Result<Json<Vec<Task>>> {
    Ok(Json(store.list_tasks().await?))
}

async fn create_task(
    AppState(store): AppState<Store>,
    Json(new_task): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>)> {
    let task = store.create_task(new_task).await?;
    info!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    Path(id): Path<u64>,
    AppState(store): AppState<Store>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<Task>> {
    let task = store.update_task(id, update).await?;
    info!(id, "task updated");
    Ok(Json(task))
}

async fn delete_task(Path(id): Path<u64>, AppState(store): AppState<Store>) -> Result<Json<Task>> {
    let task = store.delete_task(id).await?;
    info!(id, "task deleted");
    Ok(Json(task))
}
