//! Panel reporting whether the Supabase client is configured

use crate::constants::SUPABASE_PANEL_TITLE;
use crate::supabase::{SupabaseCheck, SupabaseStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct SupabasePanel;

impl SupabasePanel {
    pub fn render(f: &mut Frame, rect: Rect, check: &SupabaseCheck) {
        let color = match check.status() {
            SupabaseStatus::Configured => Color::Green,
            SupabaseStatus::NotConfigured => Color::Gray,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", SUPABASE_PANEL_TITLE));

        let paragraph = Paragraph::new(check.message())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, rect);
    }
}
