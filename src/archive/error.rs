use crate::error::FailureKind;
use crate::fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to download {url}")]
    DownloadFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("No archive link close to '{file_name}' on the country page")]
    ArchiveLinkNotFound { file_name: String },

    #[error("Invalid archive URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to open archive '{0}'")]
    ArchiveRead(PathBuf, #[source] std::io::Error),

    #[error("Archive '{0}' is not a valid zip file")]
    CorruptArchive(PathBuf, #[source] zip::result::ZipError),

    #[error("Failed to extract into '{0}'")]
    ExtractIo(PathBuf, #[source] std::io::Error),

    #[error("No payload file found in '{0}'")]
    PayloadNotFound(PathBuf),

    #[error("Several payload files in '{dir}' and none named after the archive: {candidates:?}")]
    AmbiguousPayload {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("Extraction task failed")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ArchiveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ArchiveError::DownloadFailed { .. }
            | ArchiveError::ArchiveLinkNotFound { .. }
            | ArchiveError::InvalidUrl { .. } => FailureKind::DownloadFailed,
            ArchiveError::ArchiveRead(..)
            | ArchiveError::CorruptArchive(..)
            | ArchiveError::ExtractIo(..)
            | ArchiveError::TaskJoin(_) => FailureKind::CorruptArchive,
            ArchiveError::PayloadNotFound(_) => FailureKind::PayloadNotFound,
            ArchiveError::AmbiguousPayload { .. } => FailureKind::AmbiguousPayload,
        }
    }
}
