use super::actions::Action;
use crate::backend::TodoBackend;
use crate::entities::todo::NewTodo;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Runs backend calls off the UI loop and reports outcomes as actions
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background fetch of the todo collection
    pub fn spawn_load(&mut self, backend: Arc<dyn TodoBackend>) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match backend.fetch_todos().await {
                Ok(todos) => Action::TodosLoaded(todos),
                Err(e) => Action::LoadFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, "Load todos".to_string())
    }

    /// Spawn a background create request
    pub fn spawn_create(&mut self, backend: Arc<dyn TodoBackend>, title: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Create todo: {}", title);

        let handle = tokio::spawn(async move {
            let action = match backend.create_todo(NewTodo::new(title)).await {
                Ok(todo) => Action::TodoCreated(todo),
                Err(e) => Action::CreateFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description)
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(task_id, BackgroundTask { handle, description });
        task_id
    }

    /// Drop finished tasks and return their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id).map(|task| (id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
