mod common;

use common::{todo, FakeBackend};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use todoterm::config::{DisplayConfig, SupabaseConfig};
use todoterm::logger::Logger;
use todoterm::supabase::{SupabaseCheck, SupabaseClient, SupabaseStatus};
use todoterm::ui::core::{Action, DialogType, EventType};
use todoterm::ui::AppComponent;

fn app_with(backend: std::sync::Arc<FakeBackend>) -> AppComponent {
    AppComponent::new(backend, SupabaseCheck::default(), DisplayConfig::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode, modifiers: KeyModifiers) -> Action {
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers)))
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

/// Wait for one background result and apply it
async fn settle(app: &mut AppComponent) -> Action {
    let action = app.next_background_action().await.expect("background channel closed");
    app.handle_app_action(action.clone());
    action
}

#[tokio::test]
async fn mount_loads_todos() {
    let backend = FakeBackend::listing(vec![todo(1, "A", false), todo(2, "B", true)]);
    let mut app = app_with(backend.clone());

    app.mount();
    assert!(app.state().loading);

    let action = settle(&mut app).await;
    assert!(matches!(action, Action::TodosLoaded(_)));
    assert!(!app.state().loading);
    assert_eq!(app.state().todos, vec![todo(1, "A", false), todo(2, "B", true)]);
    assert_eq!(backend.fetch_count(), 1);
}

#[tokio::test]
async fn failed_load_leaves_list_empty_and_records_error() {
    let backend = FakeBackend::failing_list("connection refused");
    let mut app = app_with(backend);

    // mount itself never reports the failure
    app.mount();
    let action = settle(&mut app).await;

    assert!(matches!(action, Action::LoadFailed(_)));
    assert!(app.state().todos.is_empty());
    assert!(!app.state().loading);
    assert!(app.state().load_error.as_deref().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn blank_submit_makes_no_request() {
    let backend = FakeBackend::listing(vec![todo(1, "A", false)]);
    let mut app = app_with(backend.clone());
    app.mount();
    settle(&mut app).await;

    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    tokio::task::yield_now().await;

    assert_eq!(backend.create_count(), 0);
    assert_eq!(app.state().submitting, 0);
    assert!(app.process_background_actions().is_empty());
    assert_eq!(app.state().todos, vec![todo(1, "A", false)]);
    assert_eq!(app.state().input, "   ");
}

#[tokio::test]
async fn submit_prepends_created_todo_and_clears_input() {
    let backend = FakeBackend::listing(vec![todo(1, "A", false)]);
    backend.set_create_reply(Ok(todo(3, "Buy milk", false)));
    let mut app = app_with(backend.clone());
    app.mount();
    settle(&mut app).await;

    type_text(&mut app, "Buy milk");
    assert_eq!(app.state().input, "Buy milk");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.state().submitting, 1);

    let action = settle(&mut app).await;
    assert!(matches!(action, Action::TodoCreated(_)));
    assert_eq!(app.state().todos[0], todo(3, "Buy milk", false));
    assert_eq!(app.state().todos.len(), 2);
    assert!(app.state().input.is_empty());
    assert_eq!(app.state().submitting, 0);
    assert_eq!(*backend.created_titles.lock().unwrap(), vec!["Buy milk".to_string()]);
}

#[tokio::test]
async fn title_is_sent_as_typed() {
    let backend = FakeBackend::listing(Vec::new());
    backend.set_create_reply(Ok(todo(4, " padded ", false)));
    let mut app = app_with(backend.clone());

    type_text(&mut app, " padded ");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    settle(&mut app).await;

    assert_eq!(*backend.created_titles.lock().unwrap(), vec![" padded ".to_string()]);
}

#[tokio::test]
async fn failed_create_keeps_list_and_input() {
    let backend = FakeBackend::listing(vec![todo(1, "A", false)]);
    backend.set_create_reply(Err("response has no data field".to_string()));
    let mut app = app_with(backend);
    app.mount();
    settle(&mut app).await;

    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    let action = settle(&mut app).await;

    assert!(matches!(action, Action::CreateFailed(_)));
    assert_eq!(app.state().todos, vec![todo(1, "A", false)]);
    assert_eq!(app.state().input, "Buy milk");
    assert_eq!(app.state().submitting, 0);
    assert!(app.state().submit_error.is_some());
}

#[tokio::test]
async fn late_load_replaces_prepended_todo() {
    let mut app = app_with(FakeBackend::listing(Vec::new()));

    app.handle_app_action(Action::TodoCreated(todo(9, "early add", false)));
    app.handle_app_action(Action::TodosLoaded(vec![todo(1, "A", false)]));

    assert_eq!(app.state().todos, vec![todo(1, "A", false)]);
}

#[tokio::test]
async fn editing_keys_update_input() {
    let mut app = app_with(FakeBackend::listing(Vec::new()));

    type_text(&mut app, "milk");
    press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
    assert_eq!(app.state().input, "mil");

    press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert!(app.state().input.is_empty());
}

#[tokio::test]
async fn logs_dialog_captures_keys_until_closed() {
    let mut app = app_with(FakeBackend::listing(Vec::new()));

    press(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL);
    assert_eq!(app.state().dialog, Some(DialogType::Logs));

    type_text(&mut app, "abc");
    assert!(app.state().input.is_empty());

    press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(app.state().dialog, None);

    type_text(&mut app, "abc");
    assert_eq!(app.state().input, "abc");
}

#[tokio::test]
async fn ctrl_q_quits() {
    let mut app = app_with(FakeBackend::listing(Vec::new()));
    assert!(!app.should_quit());

    let action = press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(action, Action::Quit);
    assert!(app.should_quit());
}

#[tokio::test]
async fn quitting_aborts_requests_in_flight() {
    let backend = FakeBackend::listing(Vec::new());
    backend.stall_creates();
    let mut app = app_with(backend);

    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.active_task_count(), 1);

    press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
    assert_eq!(app.active_task_count(), 0);

    // The aborted create never reports back
    let late = tokio::time::timeout(Duration::from_millis(50), app.next_background_action()).await;
    assert!(late.is_err(), "unexpected action after quit: {late:?}");
}

#[tokio::test]
async fn supabase_status_reflects_client() {
    let app = app_with(FakeBackend::listing(Vec::new()));
    assert_eq!(app.supabase_status(), SupabaseStatus::NotConfigured);

    let client = SupabaseClient::from_credentials(Some("https://x.supabase.co".into()), Some("anon".into()));
    let app = AppComponent::new(
        FakeBackend::listing(Vec::new()),
        SupabaseCheck::new(SupabaseConfig::default(), client),
        DisplayConfig::default(),
        Logger::new(),
    );
    assert_eq!(app.supabase_status(), SupabaseStatus::Configured);
}

#[tokio::test]
async fn operations_are_logged() {
    let backend = FakeBackend::listing(vec![todo(1, "A", false)]);
    let logger = Logger::new();
    let mut app = AppComponent::new(backend, SupabaseCheck::default(), DisplayConfig::default(), logger.clone());

    app.mount();
    settle(&mut app).await;

    let logs = logger.get_logs();
    assert!(logs.iter().any(|line| line.contains("Loaded 1 todos")));
}
