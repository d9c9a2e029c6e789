use crate::api::error::FetchError;
use crate::api::lookup::CountryLookup;
use crate::schemas::CountryRecord;
use std::sync::Arc;

/// Turns a search term into a list of matching countries.
///
/// An empty term never reaches the collaborator. Failures are logged here so
/// callers only have to decide what to show.
#[derive(Clone)]
pub struct SuggestionClient {
    lookup: Arc<dyn CountryLookup>,
}

impl SuggestionClient {
    pub fn new(lookup: Arc<dyn CountryLookup>) -> Self {
        Self { lookup }
    }

    /// Matching countries in API order, or an empty list on any failure.
    pub fn fetch_suggestions(&self, term: &str) -> Vec<CountryRecord> {
        self.try_fetch_suggestions(term).unwrap_or_default()
    }

    /// Same lookup as [`fetch_suggestions`](Self::fetch_suggestions) but
    /// reports why it failed.
    pub fn try_fetch_suggestions(&self, term: &str) -> Result<Vec<CountryRecord>, FetchError> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        match self.lookup.search_by_name(term) {
            Ok(countries) => {
                tracing::debug!(term, count = countries.len(), "Fetched suggestions");
                Ok(countries)
            }
            Err(e) => {
                tracing::warn!(term, error = %e, "Failed to fetch suggestions");
                Err(e)
            }
        }
    }
}
