use serde::{Deserialize, Serialize};

/// A todo record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for creating a todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// `{ "data": [...] }` envelope returned by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListResponse {
    #[serde(default)]
    pub data: Option<Vec<Todo>>,
}

impl TodoListResponse {
    /// The listed todos, or an empty list when `data` is missing or null.
    pub fn into_todos(self) -> Vec<Todo> {
        self.data.unwrap_or_default()
    }
}

/// `{ "data": {...} }` envelope returned by the create endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TodoItemResponse {
    #[serde(default)]
    pub data: Option<Todo>,
}
