//! Modal listing the in-memory application logs

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct LogsDialog;

impl LogsDialog {
    pub fn render(f: &mut Frame, area: Rect, logger: &Logger) {
        let modal_area = LayoutManager::centered_rect(80, 80, area);
        f.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(DIALOG_TITLE_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));

        let logs = logger.get_logs();
        if logs.is_empty() {
            let empty = Paragraph::new("No logs available")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, modal_area);
            return;
        }

        let items: Vec<ListItem> = logs
            .into_iter()
            .map(|line| {
                let color = if line.contains("❌") || line.contains("failed") {
                    Color::Red
                } else if line.contains("✅") {
                    Color::Green
                } else {
                    Color::White
                };
                ListItem::new(line).style(Style::default().fg(color))
            })
            .collect();

        f.render_widget(List::new(items).block(block), modal_area);
    }
}
