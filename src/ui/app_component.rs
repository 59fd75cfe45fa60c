use crate::backend::TodoBackend;
use crate::config::DisplayConfig;
use crate::constants::{APP_SUBTITLE, APP_TITLE};
use crate::entities::todo::Todo;
use crate::logger::Logger;
use crate::supabase::{SupabaseCheck, SupabaseStatus};
use crate::ui::components::{LogsDialog, StatusBar, SupabasePanel, TodoFormComponent, TodoListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub input: String,
    pub loading: bool,
    /// Create requests still in flight
    pub submitting: usize,
    pub load_error: Option<String>,
    pub submit_error: Option<String>,
    pub dialog: Option<DialogType>,
}

impl AppState {
    /// Replace the whole list with a fresh load
    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.loading = false;
        self.load_error = None;
    }

    /// Put a newly created todo at the top and reset the form
    pub fn prepend_todo(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
        self.input.clear();
        self.submitting = self.submitting.saturating_sub(1);
        self.submit_error = None;
    }

    /// Title to send, or `None` when the input is blank
    pub fn pending_title(&self) -> Option<String> {
        if self.input.trim().is_empty() {
            None
        } else {
            Some(self.input.clone())
        }
    }
}

pub struct AppComponent {
    // Component composition
    todo_list: TodoListComponent,
    form: TodoFormComponent,

    // Application state
    state: AppState,

    // Services
    backend: Arc<dyn TodoBackend>,
    supabase: SupabaseCheck,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(
        backend: Arc<dyn TodoBackend>,
        supabase: SupabaseCheck,
        display: DisplayConfig,
        logger: Logger,
    ) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            todo_list: TodoListComponent::new(display),
            form: TodoFormComponent::new(),
            state: AppState::default(),
            backend,
            supabase,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn supabase_status(&self) -> SupabaseStatus {
        self.supabase.status()
    }

    /// Get the number of background requests not yet cleaned up
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Start-up sequence: kick off the initial load.
    ///
    /// Never fails; the outcome arrives later as a background action.
    pub fn mount(&mut self) {
        self.logger.log(format!(
            "AppComponent: Mounting with {} backend ({})",
            self.backend.backend_type(),
            self.supabase.message()
        ));
        self.handle_app_action(Action::LoadTodos);
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.todo_list.update_data(self.state.todos.clone());
        self.form
            .update_data(self.state.input.clone(), self.state.submitting > 0);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('g') if ctrl => {
                if self.state.dialog.is_some() {
                    Action::HideDialog
                } else {
                    Action::ShowDialog(DialogType::Logs)
                }
            }
            KeyCode::Esc if self.state.dialog.is_some() => Action::HideDialog,
            _ => Action::None,
        }
    }

    /// Process a terminal event through key routing and state updates
    pub fn handle_event(&mut self, event: EventType) -> Action {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key_events(key);
                let action = self.update(action);
                self.handle_app_action(action)
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        }
    }

    /// Drain results reported by background tasks without blocking
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        for (task_id, description) in self.task_manager.cleanup_finished_tasks() {
            self.logger
                .log(format!("Background: Task {} finished ({})", task_id, description));
        }
        actions
    }

    /// Wait for the next background result
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Apply an action to application state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let result = match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::Quit
            }
            Action::InputChar(c) => {
                self.state.input.push(c);
                Action::None
            }
            Action::InputBackspace => {
                self.state.input.pop();
                Action::None
            }
            Action::ClearInput => {
                self.state.input.clear();
                Action::None
            }
            Action::SubmitInput => match self.state.pending_title() {
                Some(title) => self.handle_app_action(Action::CreateTodo(title)),
                // Blank input: nothing to send
                None => Action::None,
            },
            Action::LoadTodos => {
                self.logger.log("Data: Loading todos".to_string());
                self.state.loading = true;
                self.task_manager.spawn_load(Arc::clone(&self.backend));
                Action::None
            }
            Action::TodosLoaded(todos) => {
                self.logger
                    .log(format!("✅ Data: Loaded {} todos", todos.len()));
                self.state.replace_todos(todos);
                Action::None
            }
            Action::LoadFailed(error) => {
                self.logger.log(format!("❌ Data: Load failed: {}", error));
                log::warn!("Loading todos failed: {}", error);
                self.state.loading = false;
                self.state.load_error = Some(error);
                Action::None
            }
            Action::CreateTodo(title) => {
                self.logger.log(format!("Data: Creating todo '{}'", title));
                self.state.submitting += 1;
                self.state.submit_error = None;
                self.task_manager.spawn_create(Arc::clone(&self.backend), title);
                Action::None
            }
            Action::TodoCreated(todo) => {
                self.logger
                    .log(format!("✅ Data: Created todo {} '{}'", todo.id, todo.title));
                self.state.prepend_todo(todo);
                Action::None
            }
            Action::CreateFailed(error) => {
                self.logger.log(format!("❌ Data: Create failed: {}", error));
                log::warn!("Creating todo failed: {}", error);
                self.state.submitting = self.state.submitting.saturating_sub(1);
                self.state.submit_error = Some(error);
                Action::None
            }
            Action::ShowDialog(dialog) => {
                self.state.dialog = Some(dialog);
                Action::None
            }
            Action::HideDialog => {
                self.state.dialog = None;
                Action::None
            }
            // Navigation is consumed by the list component before it gets here
            Action::NextTodo | Action::PreviousTodo | Action::None => Action::None,
        };

        self.sync_component_data();
        result
    }

    fn render_header(f: &mut Frame, rect: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
        ]);
        f.render_widget(header, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let global = self.handle_global_key(key);
        if global != Action::None {
            return global;
        }

        // The logs dialog swallows everything else while open
        if self.state.dialog.is_some() {
            return Action::None;
        }

        match self.todo_list.handle_key_events(key) {
            Action::None => self.form.handle_key_events(key),
            action => action,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        Self::render_header(f, areas.header);
        self.form.render(f, areas.input);
        self.todo_list.render(f, areas.list);
        SupabasePanel::render(f, areas.supabase, &self.supabase);
        StatusBar::render(f, areas.status, &self.state);

        if let Some(DialogType::Logs) = self.state.dialog {
            LogsDialog::render(f, rect, &self.logger);
        }
    }
}
