use std::sync::Mutex;

use serde_json::json;
use taskboard_client::{ClientError, TaskManager, TasksApi, UserInterface};
use taskboard_model::NewTask;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Test double for the page binding: records everything the manager
/// does to the surface and answers `confirm` with a preset choice.
struct RecordingUi {
    confirm_answer: bool,
    html: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
    form_resets: Mutex<usize>,
}

impl RecordingUi {
    fn new(confirm_answer: bool) -> Self {
        RecordingUi {
            confirm_answer,
            html: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
            form_resets: Mutex::new(0),
        }
    }

    fn html(&self) -> Vec<String> {
        self.html.lock().unwrap().clone()
    }

    fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    fn form_resets(&self) -> usize {
        *self.form_resets.lock().unwrap()
    }
}

impl UserInterface for &RecordingUi {
    fn set_tasks_html(&self, html: &str) {
        self.html.lock().unwrap().push(html.to_string());
    }

    fn reset_form(&self) {
        *self.form_resets.lock().unwrap() += 1;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.confirms.lock().unwrap().push(prompt.to_string());
        self.confirm_answer
    }
}

fn task_json(id: u64, title: &str, completed: bool) -> serde_json::Value {
    json!({"id": id, "title": title, "description": null, "completed": completed})
}

#[tokio::test]
async fn api_surfaces_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Title is required"})),
        )
        .mount(&server)
        .await;

    let api = TasksApi::new(server.uri());
    let result = api.create_task(&NewTask::default()).await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Title is required");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_title_is_dropped_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.submit_new_task("   ", "ignored").await;

    assert!(ui.alerts().is_empty());
    assert_eq!(ui.form_resets(), 0);
}

#[tokio::test]
async fn successful_submit_resets_form_and_rerenders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_partial_json(json!({"title": "buy milk"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(1, "buy milk", false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([task_json(1, "buy milk", false)])))
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.submit_new_task("  buy milk ", "").await;

    assert_eq!(ui.form_resets(), 1);
    let html = ui.html();
    assert!(html.first().unwrap().contains("Loading tasks"));
    assert!(html.last().unwrap().contains("buy milk"));
    assert!(ui.alerts().is_empty());
}

#[tokio::test]
async fn failed_submit_alerts_and_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.submit_new_task("buy milk", "").await;

    assert_eq!(ui.alerts(), vec!["Failed to create task".to_string()]);
    assert_eq!(ui.form_resets(), 0);
}

#[tokio::test]
async fn failed_refresh_replaces_list_with_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.refresh_list().await;

    let html = ui.html();
    assert!(html.first().unwrap().contains("Loading tasks"));
    assert!(html.last().unwrap().contains("Failed to load tasks"));
    // Fetch failures replace the list; they never raise a dialog.
    assert!(ui.alerts().is_empty());
}

#[tokio::test]
async fn toggle_sends_the_flipped_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([task_json(1, "one", false)])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/1"))
        .and(body_partial_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(1, "one", true)))
        .expect(1)
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.toggle_completion(1).await;

    assert!(ui.alerts().is_empty());
}

#[tokio::test]
async fn toggle_of_vanished_task_is_abandoned_silently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.toggle_completion(7).await;

    assert!(ui.alerts().is_empty());
}

#[tokio::test]
async fn confirmed_delete_removes_and_rerenders() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(1, "one", false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.delete_task_interactive(1).await;

    assert!(ui.html().last().unwrap().contains("No tasks yet"));
    assert!(ui.alerts().is_empty());
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ui = RecordingUi::new(false);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.delete_task_interactive(1).await;

    assert_eq!(
        ui.confirms.lock().unwrap().as_slice(),
        ["Are you sure you want to delete this task?"]
    );
    assert!(ui.html().is_empty());
}

#[tokio::test]
async fn failed_delete_alerts() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Task not found"})))
        .mount(&server)
        .await;

    let ui = RecordingUi::new(true);
    let manager = TaskManager::new(TasksApi::new(server.uri()), &ui);
    manager.delete_task_interactive(9).await;

    assert_eq!(ui.alerts(), vec!["Failed to delete task".to_string()]);
}
