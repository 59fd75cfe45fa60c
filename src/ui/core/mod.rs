//! Core UI functionality for todoterm.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are read from the terminal through the [`EventHandler`]
//! 4. **Tasks** run backend calls in the background via the [`TaskManager`]
//!    and report back as actions, so all state changes happen on the UI loop

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
