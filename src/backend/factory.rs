//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Result};

use super::{http::HttpBackend, TodoBackend};

/// Create a backend instance from its type and base URL.
///
/// # Arguments
/// * `backend_type` - The type of backend (currently only "http")
/// * `base_url` - Root URL of the REST service, without the `/api/todos` suffix
///
/// # Errors
/// Returns error if the backend type is unknown or the base URL is empty.
pub fn create_backend(backend_type: &str, base_url: &str) -> Result<Box<dyn TodoBackend>> {
    match backend_type {
        "http" => {
            if base_url.trim().is_empty() {
                return Err(anyhow!("Base URL cannot be empty"));
            }
            Ok(Box::new(HttpBackend::new(base_url.trim())))
        }
        _ => Err(anyhow!("Unknown backend type: {}", backend_type)),
    }
}
