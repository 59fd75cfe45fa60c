use crate::entities::todo::Todo;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTodo,
    PreviousTodo,

    // Input form
    InputChar(char),
    InputBackspace,
    ClearInput,
    SubmitInput,

    // Backend operations
    LoadTodos,
    TodosLoaded(Vec<Todo>),
    LoadFailed(String),
    CreateTodo(String),
    TodoCreated(Todo),
    CreateFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Logs,
}
