use std::sync::Arc;

use anyhow::Result;
use todoterm::backend::create_backend;
use todoterm::config::Config;
use todoterm::constants::ERROR_NO_API_BASE_URL;
use todoterm::logger::{self, Logger};
use todoterm::supabase::SupabaseCheck;
use todoterm::ui::{run_app, AppComponent};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Check that the backend is reachable by configuration
    let base_url = match config.api.resolve_base_url() {
        Ok(url) => url,
        Err(_) => {
            eprintln!("{}", ERROR_NO_API_BASE_URL);
            eprintln!("\n💡 To use this app:");
            eprintln!("1. Start the todo backend (it must serve GET/POST /api/todos)");
            eprintln!("2. Set its root URL: export {}=http://localhost:8000", config.api.base_url_env);
            eprintln!("3. Run the app again");
            return Ok(());
        }
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger::install(&logger, config.logging.level_filter()?)?;
    log::info!("Starting todoterm against {}", base_url);

    let backend = Arc::from(create_backend("http", &base_url)?);
    let supabase = SupabaseCheck::from_env(&config.supabase);

    let app = AppComponent::new(backend, supabase, config.display.clone(), logger.clone());
    let result = run_app(app).await;

    logger.flush();
    result
}
