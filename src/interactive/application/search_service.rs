use crate::api::SuggestionClient;
use crate::interactive::domain::models::{SearchOutcome, SearchRequest, SearchResponse};

pub struct SearchService {
    client: SuggestionClient,
}

impl SearchService {
    pub fn new(client: SuggestionClient) -> Self {
        Self { client }
    }

    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        tracing::debug!(id = request.id, term = %request.term, "Executing lookup");

        let outcome = match self.client.try_fetch_suggestions(&request.term) {
            Ok(countries) => SearchOutcome::Found(countries),
            Err(_) => SearchOutcome::Failed,
        };

        SearchResponse {
            id: request.id,
            outcome,
        }
    }
}
