use crate::schemas::CountryRecord;

/// Where the widget is in the type → settle → lookup → select cycle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchPhase {
    Idle,
    Debouncing,
    Loading,
    Results,
    Error,
    Committed,
}

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub term: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<CountryRecord>),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub id: u64,
    pub outcome: SearchOutcome,
}
