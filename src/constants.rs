//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend
/// Path of the todo collection, appended to the API base URL
pub const TODOS_ENDPOINT: &str = "/api/todos";
/// Default environment variable holding the API base URL
pub const DEFAULT_API_BASE_URL_ENV: &str = "API_BASE_URL";
/// Default environment variable holding the Supabase project URL
pub const DEFAULT_SUPABASE_URL_ENV: &str = "SUPABASE_URL";
/// Default environment variable holding the Supabase public key
pub const DEFAULT_SUPABASE_ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

// Page text
pub const APP_TITLE: &str = "Railway + React + FastAPI + Supabase";
pub const APP_SUBTITLE: &str = "Simple Todos demo. Backend stores todos in Supabase.";
pub const INPUT_TITLE: &str = "Add a todo…";
pub const LIST_TITLE: &str = "Todos";
pub const SUPABASE_PANEL_TITLE: &str = "Direct Supabase (client) check";
pub const DONE_MARKER: &str = " ✅";

// Supabase status messages
pub const SUPABASE_CONFIGURED: &str = "Supabase client configured. (This demo does not query directly via client; backend is the source of truth.)";

// Status line
pub const STATUS_LOADING: &str = "⏳ Loading todos...";
pub const STATUS_SUBMITTING: &str = "⏳ Adding todo...";
pub const STATUS_HINTS: &str = "Enter add • Esc clear • ↑/↓ move • Ctrl+G logs • Ctrl+Q quit";

// Error Messages
pub const ERROR_LOAD_FAILED: &str = "❌ Failed to load todos";
pub const ERROR_CREATE_FAILED: &str = "❌ Failed to add todo";
pub const ERROR_NO_API_BASE_URL: &str = "❌ Error: API_BASE_URL environment variable not set";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or Ctrl+G to close";

// Display
/// Default format for the creation timestamp under each todo
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Maximum number of in-memory log lines kept for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 500;
