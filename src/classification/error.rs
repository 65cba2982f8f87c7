use crate::error::FailureKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("'{0}' is not a recognized country")]
    CountryUnrecognized(String),

    #[error("No continent known for {country} ({code})")]
    ContinentUnresolved { country: String, code: String },
}

impl ClassifyError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClassifyError::CountryUnrecognized(_) => FailureKind::CountryUnrecognized,
            ClassifyError::ContinentUnresolved { .. } => FailureKind::ContinentUnresolved,
        }
    }
}
