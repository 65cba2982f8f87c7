use crate::error::FailureKind;
use crate::fetch::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("No geocoding match with a country for '{0}'")]
    NotFound(String),

    #[error("Geocoding service failed for '{query}'")]
    Service {
        query: String,
        #[source]
        source: FetchError,
    },
}

impl GeocodeError {
    pub fn kind(&self) -> FailureKind {
        FailureKind::GeocodeNotFound
    }
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation request failed")]
    Request(#[from] FetchError),

    #[error("Translation service returned no text for '{0}'")]
    EmptyTranslation(String),
}

impl TranslationError {
    pub fn kind(&self) -> FailureKind {
        FailureKind::TranslationUnavailable
    }
}
