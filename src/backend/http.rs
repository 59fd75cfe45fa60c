//! REST backend implementation over reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{BackendError, TodoBackend};
use crate::constants::TODOS_ENDPOINT;
use crate::entities::todo::{NewTodo, Todo, TodoItemResponse, TodoListResponse};

/// Backend talking to `{base_url}/api/todos`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the todo collection.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TODOS_ENDPOINT)
    }

    // Helper: reject non-success statuses, then read the body as text
    async fn read_body(response: Response) -> Result<String, BackendError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl TodoBackend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn fetch_todos(&self) -> Result<Vec<Todo>, BackendError> {
        let url = self.endpoint();
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let body = Self::read_body(response).await?;

        let parsed: TodoListResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::InvalidData(e.to_string()))?;
        let todos = parsed.into_todos();
        log::info!("Fetched {} todos from {}", todos.len(), url);
        Ok(todos)
    }

    async fn create_todo(&self, args: NewTodo) -> Result<Todo, BackendError> {
        let url = self.endpoint();
        log::debug!("POST {} title={:?}", url, args.title);

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let body = Self::read_body(response).await?;

        let parsed: TodoItemResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::InvalidData(e.to_string()))?;
        let todo = parsed
            .data
            .ok_or_else(|| BackendError::InvalidData("response has no data field".to_string()))?;
        log::info!("Created todo {} ({})", todo.id, todo.title);
        Ok(todo)
    }
}
