//! Backend abstraction layer for the todo REST service.
//!
//! This module defines the interface the UI uses to reach the todo backend,
//! along with the error type shared by every implementation.

use async_trait::async_trait;

use crate::entities::todo::{NewTodo, Todo};

pub mod factory;
pub mod http;

pub use factory::create_backend;
pub use http::HttpBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Backend trait that all todo backends must implement.
#[async_trait]
pub trait TodoBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "http").
    fn backend_type(&self) -> &str;

    /// Fetch the whole todo collection. A response without `data` yields an empty list.
    async fn fetch_todos(&self) -> Result<Vec<Todo>, BackendError>;

    /// Create a todo and return the record assigned by the backend.
    async fn create_todo(&self, args: NewTodo) -> Result<Todo, BackendError>;
}
