use crate::interactive::constants::CLEAR_BUTTON_WIDTH;
use crate::interactive::domain::models::SearchPhase;
use crate::interactive::ui::components::{Component, styles::Styles, text_input::TextInput};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Search input with a Clear button on its right
#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    phase: Option<SearchPhase>,
    message: Option<String>,
    clear_area: Rect,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            phase: None,
            message: None,
            clear_area: Rect::default(),
        }
    }

    /// Sync with the controller's text. The cursor only moves when the text
    /// was changed from outside the bar (commit, click, clear).
    pub fn set_query(&mut self, query: &str) {
        if self.input.text() != query {
            self.input.set_text(query.to_string());
        }
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn cursor_position(&self) -> usize {
        self.input.cursor_position()
    }

    pub fn set_phase(&mut self, phase: SearchPhase) {
        self.phase = Some(phase);
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Whether a mouse position falls on the Clear button drawn last frame
    pub fn hit_clear(&self, column: u16, row: u16) -> bool {
        self.clear_area.contains(Position::new(column, row))
    }

    fn title(&self) -> String {
        let mut title = "Search".to_string();
        match self.phase {
            Some(SearchPhase::Debouncing) => title.push_str(" [typing...]"),
            Some(SearchPhase::Loading) => title.push_str(" [searching...]"),
            _ => {}
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }
        title
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(CLEAR_BUTTON_WIDTH)])
            .split(area);

        let input = Paragraph::new(Line::from(self.input.render_cursor_spans()))
            .block(Block::default().title(self.title()).borders(Borders::ALL))
            .style(Styles::input());
        f.render_widget(input, chunks[0]);

        let clear = Paragraph::new("Clear")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Styles::normal());
        f.render_widget(clear, chunks[1]);
        self.clear_area = chunks[1];
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.input.handle_key(key) {
            Some(Message::QueryChanged(self.input.text().to_string()))
        } else {
            None
        }
    }
}
