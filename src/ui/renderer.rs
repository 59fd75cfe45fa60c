//! Terminal setup and the main event loop

use crate::ui::app_component::AppComponent;
use crate::ui::core::{actions::Action, Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the TUI until the user quits
pub async fn run_app(mut app: AppComponent) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = init_terminal_with(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal_modes,
    )?;

    let mut event_handler = EventHandler::new();

    // Initial load starts before the first frame so the list fills in as soon as it arrives
    app.mount();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Finish terminal setup once raw mode is on; `restore` runs if any step fails
fn init_terminal_with<T>(
    build: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce(),
) -> anyhow::Result<T> {
    match build() {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            restore();
            Err(e)
        }
    }
}

// Best effort: the setup error is the one worth reporting
fn restore_terminal_modes() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_event(EventType::Key(key));
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    let processed_action = app.update(action);
                    if app.handle_app_action(processed_action) == Action::Quit {
                        return Ok(());
                    }
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
