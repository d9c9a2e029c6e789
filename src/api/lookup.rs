use crate::api::error::FetchError;
use crate::schemas::CountryRecord;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1";

// Only what the widget renders; keeps payloads small
const RESPONSE_FIELDS: &str = "name,capital,population";

/// The remote country-data collaborator.
pub trait CountryLookup: Send + Sync {
    fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, FetchError>;
}

/// REST Countries lookup over blocking HTTP.
pub struct RestCountries {
    client: Client,
    base_url: String,
}

impl RestCountries {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn lookup_url(&self, term: &str) -> String {
        format!(
            "{}/name/{}?fields={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(term),
            RESPONSE_FIELDS
        )
    }
}

impl CountryLookup for RestCountries {
    fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, FetchError> {
        let url = self.lookup_url(term);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        decode_countries(&body)
    }
}

pub fn decode_countries(body: &[u8]) -> Result<Vec<CountryRecord>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
