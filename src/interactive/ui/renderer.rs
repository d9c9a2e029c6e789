use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, country_detail::CountryDetail, search_bar::SearchBar, styles::Styles,
    suggestion_list::SuggestionList,
};
use crate::interactive::ui::events::Message;
use crate::interactive::constants::*;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
};

const KEY_HELP: &str = "↑/↓: Select | Enter: Fill | Click: Choose | Esc: Clear | Ctrl+C: Exit";

pub struct Renderer {
    search_bar: SearchBar,
    suggestion_list: SuggestionList,
    country_detail: CountryDetail,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            suggestion_list: SuggestionList::new(),
            country_detail: CountryDetail::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let has_error = state.search.error_message.is_some();
        let has_detail = state.search.committed_selection.is_some();

        let mut constraints = vec![Constraint::Length(SEARCH_BAR_HEIGHT)];
        if has_error {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(MIN_SUGGESTION_LIST_HEIGHT));
        if has_detail {
            constraints.push(Constraint::Length(COUNTRY_DETAIL_HEIGHT));
        }
        constraints.push(Constraint::Length(1)); // Status bar

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.area());
        let mut chunk = chunks.iter().copied();

        // Update component state
        self.search_bar.set_query(&state.search.raw_text);
        self.search_bar.set_phase(state.phase());
        self.search_bar.set_message(state.ui.message.clone());
        self.suggestion_list.set_suggestions(&state.search.suggestions);
        self.suggestion_list.set_selected_index(state.search.selected_index);
        self.suggestion_list.set_loading(state.search.is_loading);
        self.country_detail
            .set_country(state.search.committed_selection.as_ref());

        if let Some(area) = chunk.next() {
            self.search_bar.render(f, area);
        }

        if let Some(error) = &state.search.error_message {
            if let Some(area) = chunk.next() {
                f.render_widget(Paragraph::new(error.as_str()).style(Styles::error()), area);
            }
        }

        if let Some(area) = chunk.next() {
            self.suggestion_list.render(f, area);
        }

        if has_detail {
            if let Some(area) = chunk.next() {
                self.country_detail.render(f, area);
            }
        }

        if let Some(area) = chunk.next() {
            f.render_widget(Paragraph::new(KEY_HELP).style(Styles::dimmed()), area);
        }
    }

    /// Translate a mouse click into a message using the last drawn layout
    pub fn message_at(&self, column: u16, row: u16) -> Option<Message> {
        if self.search_bar.hit_clear(column, row) {
            return Some(Message::Clear);
        }
        self.suggestion_list
            .index_at(column, row)
            .map(Message::SuggestionClicked)
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }

    pub fn get_country_detail(&self) -> &CountryDetail {
        &self.country_detail
    }
}
