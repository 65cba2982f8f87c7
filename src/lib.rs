//! Resolve a city name to the most recent TMYx EPW weather file published by
//! [climate.onebuilding.org](https://climate.onebuilding.org).
//!
//! ```no_run
//! # use epw_finder::{EpwFinder, EpwFinderError};
//! # #[tokio::main]
//! # async fn main() -> Result<(), EpwFinderError> {
//! let finder = EpwFinder::new().await?;
//! let resolution = finder.resolve("Lyon").await?;
//! println!(
//!     "{} ({}) -> {}",
//!     resolution.dataset.city,
//!     resolution.dataset.candidate.year_range,
//!     resolution.payload.display()
//! );
//! # Ok(())
//! # }
//! ```

mod archive;
mod catalog;
mod classification;
mod config;
mod epw_finder;
mod error;
mod fetch;
pub mod fuzzy;
mod geocoding;
mod utils;

#[cfg(test)]
mod testing;

pub use epw_finder::*;
pub use error::{EpwFinderError, FailureKind};

pub use config::FinderConfig;

pub use fetch::{FetchError, HttpFetcher, PageFetcher};

pub use geocoding::{
    locate_country, normalize_to_english, GeocodeError, GeocodeHit, Geocoder, GoogleTranslator,
    LanguageDetector, NominatimGeocoder, TranslationError, Translator, WhatlangDetector,
};

pub use classification::{
    classify, lookup_country, ClassifyError, Continent, CountryRecord, ResolvedLocation, WmoRegion,
};

pub use catalog::{
    extract_city_name, fetch_city_datasets, fetch_region_catalog, fetch_region_catalogs,
    normalize_city_name, parse_catalog_link, parse_dataset_link, resolve_country_page,
    select_dataset, CatalogError, CityDatasetGroup, CityDatasets, CountryPage, DatasetCandidate,
    RegionCatalog, RegionCatalogEntry, SelectedDataset, YearRange,
};

pub use archive::{clear_extraction_dir, extract_archive, locate_payload, ArchiveError, ArchiveFetcher};
