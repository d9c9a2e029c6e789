use crate::interactive::domain::models::SearchResponse;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Input events
    QueryChanged(String),
    Clear,

    // Search lifecycle
    DebounceElapsed,
    SearchCompleted(SearchResponse),

    // Selection
    SelectNext,
    SelectPrevious,
    CommitHighlighted,
    SuggestionClicked(usize),

    // UI events
    ShowMessage(String),
    ClearMessage,

    // Terminal events
    Quit,
}
