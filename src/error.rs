use crate::archive::error::ArchiveError;
use crate::catalog::error::CatalogError;
use crate::classification::error::ClassifyError;
use crate::fetch::FetchError;
use crate::geocoding::error::GeocodeError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of every way a resolution can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    GeocodeNotFound,
    TranslationUnavailable,
    CountryUnrecognized,
    ContinentUnresolved,
    CatalogFetchFailed,
    CountryNotInCatalog,
    NoDatasetsFound,
    NoMatchingCityDataset,
    DownloadFailed,
    CorruptArchive,
    PayloadNotFound,
    AmbiguousPayload,
    /// Work directory or HTTP client could not be set up.
    Setup,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::GeocodeNotFound => "geocode not found",
            FailureKind::TranslationUnavailable => "translation unavailable",
            FailureKind::CountryUnrecognized => "country unrecognized",
            FailureKind::ContinentUnresolved => "continent unresolved",
            FailureKind::CatalogFetchFailed => "catalog fetch failed",
            FailureKind::CountryNotInCatalog => "country not in catalog",
            FailureKind::NoDatasetsFound => "no datasets found",
            FailureKind::NoMatchingCityDataset => "no matching city dataset",
            FailureKind::DownloadFailed => "download failed",
            FailureKind::CorruptArchive => "corrupt archive",
            FailureKind::PayloadNotFound => "payload not found",
            FailureKind::AmbiguousPayload => "ambiguous payload",
            FailureKind::Setup => "setup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EpwFinderError {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("Failed to create work directory '{0}'")]
    WorkDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine work directory")]
    WorkDirResolution,

    #[error("Failed to set up HTTP client")]
    Client(#[source] FetchError),
}

impl EpwFinderError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EpwFinderError::Geocode(e) => e.kind(),
            EpwFinderError::Classify(e) => e.kind(),
            EpwFinderError::Catalog(e) => e.kind(),
            EpwFinderError::Archive(e) => e.kind(),
            EpwFinderError::WorkDirCreation(..)
            | EpwFinderError::WorkDirResolution
            | EpwFinderError::Client(_) => FailureKind::Setup,
        }
    }
}
