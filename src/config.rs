use crate::api::DEFAULT_API_URL;
use crate::interactive::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_REQUEST_TIMEOUT_SECS};
use std::time::Duration;

/// Runtime settings for the interactive lookup
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub api_url: String,
    pub debounce_ms: u64,
    pub request_timeout: Duration,
    pub verbose: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            verbose: false,
        }
    }
}
