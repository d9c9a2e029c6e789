pub mod country;

pub use country::{CountryName, CountryRecord};
