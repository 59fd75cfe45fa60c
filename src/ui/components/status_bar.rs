//! Status bar component

use crate::constants::{ERROR_CREATE_FAILED, ERROR_LOAD_FAILED, STATUS_HINTS, STATUS_LOADING, STATUS_SUBMITTING};
use crate::ui::app_component::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line status: pending requests, the latest error, or the item count with key hints
pub struct StatusBar;

impl StatusBar {
    /// Text and color for the current state; errors take priority
    pub fn status_line(state: &AppState) -> (String, Color) {
        if let Some(error) = &state.submit_error {
            (format!("{}: {}", ERROR_CREATE_FAILED, error), Color::Red)
        } else if let Some(error) = &state.load_error {
            (format!("{}: {}", ERROR_LOAD_FAILED, error), Color::Red)
        } else if state.loading {
            (STATUS_LOADING.to_string(), Color::Yellow)
        } else if state.submitting > 0 {
            (STATUS_SUBMITTING.to_string(), Color::Yellow)
        } else {
            (format!("{} todos • {}", state.todos.len(), STATUS_HINTS), Color::Gray)
        }
    }

    pub fn render(f: &mut Frame, rect: Rect, state: &AppState) {
        let (text, color) = Self::status_line(state);
        let paragraph = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))));
        f.render_widget(paragraph, rect);
    }
}
