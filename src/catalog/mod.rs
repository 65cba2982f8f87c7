pub mod country_page;
pub mod dataset;
pub mod error;
pub mod html;
pub mod region_catalog;
pub mod selector;

pub use country_page::{resolve_country_page, CountryPage};
pub use dataset::{
    extract_city_name, fetch_city_datasets, normalize_city_name, parse_dataset_link,
    CityDatasetGroup, CityDatasets, DatasetCandidate, YearRange,
};
pub use error::CatalogError;
pub use region_catalog::{
    fetch_region_catalog, fetch_region_catalogs, parse_catalog_link, RegionCatalog,
    RegionCatalogEntry,
};
pub use selector::{select_dataset, SelectedDataset};
