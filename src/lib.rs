pub mod api;
pub mod config;
pub mod formatters;
pub mod interactive;
pub mod logging;
pub mod schemas;

pub use api::{CountryLookup, FetchError, RestCountries, SuggestionClient};
pub use config::SearchOptions;
pub use formatters::{format_country_line, format_population};
pub use interactive::InteractiveSearch;
pub use schemas::{CountryName, CountryRecord};
