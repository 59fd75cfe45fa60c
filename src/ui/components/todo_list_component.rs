use crate::config::DisplayConfig;
use crate::constants::{DONE_MARKER, LIST_TITLE};
use crate::entities::todo::Todo;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime::format_created_at;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Scrollable list of todos, newest additions first
pub struct TodoListComponent {
    todos: Vec<Todo>,
    display: DisplayConfig,
    list_state: ListState,
}

impl TodoListComponent {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            todos: Vec::new(),
            display,
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        // Keep the highlight in range after the list shrinks or grows
        match (self.todos.is_empty(), self.list_state.selected()) {
            (true, _) => self.list_state.select(None),
            (false, None) => self.list_state.select(Some(0)),
            (false, Some(i)) if i >= self.todos.len() => self.list_state.select(Some(self.todos.len() - 1)),
            _ => {}
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Lines shown for a single todo: the title (with a marker when done) and its creation time
    pub fn todo_lines(todo: &Todo, display: &DisplayConfig) -> Vec<Line<'static>> {
        let mut title_spans = vec![Span::styled(
            todo.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if todo.is_done {
            title_spans.push(Span::raw(DONE_MARKER));
        }

        let mut lines = vec![Line::from(title_spans)];
        if display.show_created_at {
            lines.push(Line::from(Span::styled(
                format_created_at(todo.created_at.as_deref(), &display.datetime_format),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }

    fn next(&mut self) {
        if self.todos.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.todos.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn previous(&mut self) {
        if self.todos.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down => Action::NextTodo,
            KeyCode::Up => Action::PreviousTodo,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTodo => {
                self.next();
                Action::None
            }
            Action::PreviousTodo => {
                self.previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ({}) ", LIST_TITLE, self.todos.len()));

        if self.todos.is_empty() {
            let empty = Paragraph::new("No todos yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self
            .todos
            .iter()
            .map(|todo| ListItem::new(Self::todo_lines(todo, &self.display)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
