pub mod client;
pub mod error;
pub mod lookup;


pub use client::SuggestionClient;
pub use error::FetchError;
pub use lookup::{CountryLookup, DEFAULT_API_URL, RestCountries, decode_countries};
