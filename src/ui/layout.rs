//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the page header (title + subtitle)
pub const HEADER_HEIGHT: u16 = 2;
/// Height of the bordered input field
pub const INPUT_HEIGHT: u16 = 3;
/// Height of the Supabase status panel
pub const SUPABASE_PANEL_HEIGHT: u16 = 4;
/// Height of the status bar
pub const STATUS_HEIGHT: u16 = 1;

/// Areas of the main screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub input: Rect,
    pub list: Rect,
    pub supabase: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, input, list, Supabase panel and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(SUPABASE_PANEL_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            input: chunks[1],
            list: chunks[2],
            supabase: chunks[3],
            status: chunks[4],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
