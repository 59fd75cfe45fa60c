//! Reusable UI components

pub mod logs_dialog;
pub mod status_bar;
pub mod supabase_panel;
pub mod todo_form_component;
pub mod todo_list_component;

pub use logs_dialog::LogsDialog;
pub use status_bar::StatusBar;
pub use supabase_panel::SupabasePanel;
pub use todo_form_component::TodoFormComponent;
pub use todo_list_component::TodoListComponent;
