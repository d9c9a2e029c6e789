use crate::interactive::constants::*;
use crate::interactive::domain::models::{
    SearchOutcome, SearchPhase, SearchRequest, SearchResponse,
};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::CountryRecord;

pub struct AppState {
    pub search: SearchState,
    pub ui: UiState,
    debounce_ms: u64,
}

pub struct SearchState {
    pub raw_text: String,
    pub debounced_term: String,
    pub suggestions: Vec<CountryRecord>,
    pub selected_index: Option<usize>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub committed_selection: Option<CountryRecord>,
    pub current_search_id: u64,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl AppState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            search: SearchState {
                raw_text: String::new(),
                debounced_term: String::new(),
                suggestions: Vec::new(),
                selected_index: None,
                is_loading: false,
                error_message: None,
                committed_selection: None,
                current_search_id: 0,
            },
            ui: UiState { message: None },
            debounce_ms,
        }
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(text) => self.set_raw_text(text),
            Message::Clear => {
                self.search.committed_selection = None;
                self.set_raw_text(String::new())
            }
            Message::DebounceElapsed => self.settle(),
            Message::SearchCompleted(response) => {
                self.apply_response(response);
                Command::None
            }
            Message::SelectNext => {
                let len = self.search.suggestions.len();
                if len > 0 {
                    self.search.selected_index = Some(match self.search.selected_index {
                        None => 0,
                        Some(index) => (index + 1).min(len - 1),
                    });
                }
                Command::None
            }
            Message::SelectPrevious => {
                // Moving up from the first row drops the highlight
                self.search.selected_index = match self.search.selected_index {
                    None | Some(0) => None,
                    Some(index) => Some(index - 1),
                };
                Command::None
            }
            Message::CommitHighlighted => {
                let name = self
                    .selected_suggestion()
                    .map(|country| country.common_name().to_string());
                match name {
                    Some(name) => self.set_raw_text(name),
                    None => Command::None,
                }
            }
            Message::SuggestionClicked(index) => {
                let Some(country) = self.search.suggestions.get(index).cloned() else {
                    return Command::None;
                };
                self.search.selected_index = Some(index);
                self.search.committed_selection = Some(country);
                self.set_raw_text(String::new())
            }
            Message::ShowMessage(msg) => {
                self.ui.message = Some(msg);
                Command::None
            }
            Message::ClearMessage => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    pub fn selected_suggestion(&self) -> Option<&CountryRecord> {
        self.search
            .selected_index
            .and_then(|index| self.search.suggestions.get(index))
    }

    pub fn phase(&self) -> SearchPhase {
        if self.search.is_loading {
            SearchPhase::Loading
        } else if self.search.raw_text != self.search.debounced_term {
            SearchPhase::Debouncing
        } else if self.search.error_message.is_some() {
            SearchPhase::Error
        } else if self.search.committed_selection.is_some() {
            SearchPhase::Committed
        } else if !self.search.suggestions.is_empty() {
            SearchPhase::Results
        } else {
            SearchPhase::Idle
        }
    }

    // Every edit of the input goes through the debouncer
    fn set_raw_text(&mut self, text: String) -> Command {
        self.search.raw_text = text;
        Command::ScheduleSearch(self.debounce_ms)
    }

    fn settle(&mut self) -> Command {
        if self.search.raw_text == self.search.debounced_term {
            return Command::None;
        }

        self.search.debounced_term = self.search.raw_text.clone();
        // Any in-flight lookup is superseded from here on
        self.search.current_search_id += 1;

        if self.search.debounced_term.is_empty() {
            self.search.suggestions.clear();
            self.search.selected_index = None;
            self.search.is_loading = false;
            self.search.error_message = None;
            return Command::None;
        }

        self.search.is_loading = true;
        Command::ExecuteSearch(SearchRequest {
            id: self.search.current_search_id,
            term: self.search.debounced_term.clone(),
        })
    }

    fn apply_response(&mut self, response: SearchResponse) {
        if response.id != self.search.current_search_id {
            tracing::debug!(
                id = response.id,
                current = self.search.current_search_id,
                "Discarding superseded lookup result"
            );
            return;
        }

        self.search.is_loading = false;
        self.search.selected_index = None;
        match response.outcome {
            SearchOutcome::Found(countries) => {
                self.search.suggestions = countries;
                self.search.error_message = None;
            }
            SearchOutcome::Failed => {
                self.search.suggestions.clear();
                self.search.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }
}
