use crate::interactive::constants::LOADING_TEXT;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::CountryRecord;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Scrollable list of suggestions with the highlighted row.
///
/// Rows are laid out top to bottom inside the border: an optional loading
/// row, then `suggestions[scroll_offset..]`. The inner area of the last frame
/// is kept so mouse positions can be mapped back to suggestion indices.
#[derive(Default)]
pub struct SuggestionList {
    suggestions: Vec<CountryRecord>,
    selected_index: Option<usize>,
    is_loading: bool,
    scroll_offset: usize,
    inner_area: Rect,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_suggestions(&mut self, suggestions: &[CountryRecord]) {
        if self.suggestions.as_slice() != suggestions {
            self.suggestions = suggestions.to_vec();
            self.scroll_offset = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn loading_rows(&self) -> usize {
        usize::from(self.is_loading)
    }

    fn adjust_scroll_offset(&mut self, visible_rows: usize) {
        let Some(selected) = self.selected_index else {
            return;
        };
        if visible_rows == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + visible_rows {
            self.scroll_offset = selected + 1 - visible_rows;
        }
    }

    /// Suggestion index under a mouse position, if any
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.inner_area.contains(Position::new(column, row)) {
            return None;
        }

        let line = usize::from(row - self.inner_area.y);
        let line = line.checked_sub(self.loading_rows())?;
        let index = self.scroll_offset + line;
        (index < self.suggestions.len()).then_some(index)
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = format!("Suggestions ({})", self.suggestions.len());
        let block = Block::default().title(title).borders(Borders::ALL);
        self.inner_area = block.inner(area);

        if self.suggestions.is_empty() && !self.is_loading {
            let empty = Paragraph::new("Type a country name")
                .block(block)
                .style(Styles::dimmed());
            f.render_widget(empty, area);
            return;
        }

        let visible_rows = usize::from(self.inner_area.height).saturating_sub(self.loading_rows());
        self.adjust_scroll_offset(visible_rows);

        let mut items = Vec::with_capacity(visible_rows + 1);
        if self.is_loading {
            items.push(ListItem::new(LOADING_TEXT).style(Styles::dimmed()));
        }

        let end = (self.scroll_offset + visible_rows).min(self.suggestions.len());
        for index in self.scroll_offset..end {
            let style = if self.selected_index == Some(index) {
                Styles::selected()
            } else {
                Styles::normal()
            };
            items.push(ListItem::new(self.suggestions[index].common_name()).style(style));
        }

        f.render_widget(List::new(items).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::SelectPrevious),
            KeyCode::Down => Some(Message::SelectNext),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::SelectPrevious)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::SelectNext)
            }
            KeyCode::Enter => Some(Message::CommitHighlighted),
            _ => None,
        }
    }
}
