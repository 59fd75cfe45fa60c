#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use todoterm::backend::{BackendError, TodoBackend};
use todoterm::{NewTodo, Todo};

pub fn todo(id: i64, title: &str, is_done: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        is_done,
        created_at: None,
    }
}

/// In-process backend with canned replies and call counters
#[derive(Default)]
pub struct FakeBackend {
    pub list_reply: Mutex<Option<Result<Vec<Todo>, String>>>,
    pub create_reply: Mutex<Option<Result<Todo, String>>>,
    pub fetch_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub created_titles: Mutex<Vec<String>>,
    /// Create requests never complete
    pub stall_create: AtomicBool,
}

impl FakeBackend {
    pub fn listing(todos: Vec<Todo>) -> Arc<Self> {
        let backend = Self::default();
        *backend.list_reply.lock().unwrap() = Some(Ok(todos));
        Arc::new(backend)
    }

    pub fn failing_list(message: &str) -> Arc<Self> {
        let backend = Self::default();
        *backend.list_reply.lock().unwrap() = Some(Err(message.to_string()));
        Arc::new(backend)
    }

    pub fn set_create_reply(&self, reply: Result<Todo, String>) {
        *self.create_reply.lock().unwrap() = Some(reply);
    }

    pub fn stall_creates(&self) {
        self.stall_create.store(true, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TodoBackend for FakeBackend {
    fn backend_type(&self) -> &str {
        "fake"
    }

    async fn fetch_todos(&self) -> Result<Vec<Todo>, BackendError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.list_reply.lock().unwrap().clone() {
            Some(Ok(todos)) => Ok(todos),
            Some(Err(message)) => Err(BackendError::Network(message)),
            None => Ok(Vec::new()),
        }
    }

    async fn create_todo(&self, args: NewTodo) -> Result<Todo, BackendError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created_titles.lock().unwrap().push(args.title.clone());
        if self.stall_create.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        match self.create_reply.lock().unwrap().clone() {
            Some(Ok(todo)) => Ok(todo),
            Some(Err(message)) => Err(BackendError::InvalidData(message)),
            None => Err(BackendError::InvalidData("no reply configured".to_string())),
        }
    }
}

/// Raw reply served by the mock HTTP backend
#[derive(Clone)]
pub struct CannedReply {
    pub status: StatusCode,
    pub body: String,
}

impl CannedReply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn with_status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    list: CannedReply,
    create: CannedReply,
    posted: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// Handle to a running mock server
pub struct MockServer {
    pub addr: SocketAddr,
    pub posted: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn list_todos(State(state): State<MockState>) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    (
        state.list.status,
        [("content-type", "application/json")],
        state.list.body.clone(),
    )
}

async fn create_todo(
    State(state): State<MockState>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state.posted.lock().unwrap().push(body);
    (
        state.create.status,
        [("content-type", "application/json")],
        state.create.body.clone(),
    )
}

/// Start a mock todo backend on a random local port
pub async fn start_mock_server(list: CannedReply, create: CannedReply) -> MockServer {
    let posted = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        list,
        create,
        posted: Arc::clone(&posted),
    };
    let app = Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer { addr, posted }
}
