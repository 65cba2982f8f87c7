pub mod countries;
pub mod error;
pub mod region;

pub use countries::{lookup_country, CountryRecord};
pub use error::ClassifyError;
pub use region::{classify, Continent, ResolvedLocation, WmoRegion};
