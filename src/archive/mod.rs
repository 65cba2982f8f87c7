pub mod downloader;
pub mod error;
pub mod extractor;

pub use downloader::ArchiveFetcher;
pub use error::ArchiveError;
pub use extractor::{clear_extraction_dir, extract_archive, locate_payload};
