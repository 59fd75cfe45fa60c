use crate::constants::INPUT_TITLE;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Single-line input for new todo titles
#[derive(Default)]
pub struct TodoFormComponent {
    input: String,
    submitting: bool,
}

impl TodoFormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, input: String, submitting: bool) {
        self.input = input;
        self.submitting = submitting;
    }
}

impl Component for TodoFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitInput,
            KeyCode::Esc => Action::ClearInput,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InputChar(c)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.submitting { Color::DarkGray } else { Color::Cyan };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", INPUT_TITLE))
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(format!("{}█", self.input))
            .block(block)
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, rect);
    }
}
