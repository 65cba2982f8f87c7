use crate::error::FailureKind;
use crate::fetch::FetchError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch catalog page {url}")]
    CatalogFetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Region catalogs did not load within {timeout:?}")]
    CatalogTimeout { timeout: Duration },

    #[error("No catalog page found for country '{country}'")]
    CountryNotInCatalog { country: String },

    #[error("No dataset archives listed on {url}")]
    NoDatasetsFound { url: String },

    #[error("No dataset matches city '{city}'")]
    NoMatchingCityDataset { city: String },
}

impl CatalogError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::CatalogFetchFailed { .. } | CatalogError::CatalogTimeout { .. } => {
                FailureKind::CatalogFetchFailed
            }
            CatalogError::CountryNotInCatalog { .. } => FailureKind::CountryNotInCatalog,
            CatalogError::NoDatasetsFound { .. } => FailureKind::NoDatasetsFound,
            CatalogError::NoMatchingCityDataset { .. } => FailureKind::NoMatchingCityDataset,
        }
    }
}
