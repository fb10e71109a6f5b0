use reqwest::{Client, Response};
use serde_json::Value;
use taskboard_model::{NewTask, Task, TaskUpdate};

use crate::error::ClientError;

type Result<T> = std::result::Result<T, ClientError>;

/// Thin wrapper over the store's HTTP interface. JSON bodies on writes,
/// no retries; every call is a single request/response exchange.
pub struct TasksApi {
    client: Client,
    base_url: String,
}

impl TasksApi {
    /// `base_url` is the server origin, e.g. `http://[::1]:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        TasksApi {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task> {
        let response = self
            .client
            .post(self.collection_url())
            .json(new_task)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_task(&self, id: u64, update: &TaskUpdate) -> Result<Task> {
        let response = self
            .client
            .put(self.task_url(id))
            .json(update)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_task(&self, id: u64) -> Result<()> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: u64) -> String {
        format!("{}/api/tasks/{id}", self.base_url)
    }

    /// Turn a non-success response into an `Api` error, using the
    /// body's `error` key when the server provides one.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status.to_string());
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
