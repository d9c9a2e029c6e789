use serde::{Deserialize, Serialize};

// Names as reported by the lookup API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// A single country returned by a lookup-by-name request.
///
/// Only the fields the widget displays are modeled; anything else in the
/// payload is ignored during decoding. Countries without a capital omit the
/// `capital` key entirely, so it defaults to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
}

impl CountryRecord {
    pub fn new(
        common_name: impl Into<String>,
        official_name: impl Into<String>,
        capitals: Vec<String>,
        population: u64,
    ) -> Self {
        Self {
            name: CountryName {
                common: common_name.into(),
                official: official_name.into(),
            },
            capital: capitals,
            population,
        }
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn capitals(&self) -> &[String] {
        &self.capital
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    pub fn population(&self) -> u64 {
        self.population
    }
}
