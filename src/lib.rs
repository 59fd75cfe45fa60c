//! todoterm - a terminal client for a REST todo backend
//!
//! On start-up the client fetches the todo collection once and renders it;
//! the input form creates new todos and puts them at the top of the list.
//!
//! # Modules
//!
//! * [`backend`] - REST backend access
//! * [`config`] - Application configuration management
//! * [`entities`] - Todo data model and wire envelopes
//! * [`supabase`] - Optional Supabase client configuration status
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Backend abstraction and the HTTP implementation
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Data models exchanged with the backend
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Supabase credentials and configuration status
pub mod supabase;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::todo::{NewTodo, Todo};
