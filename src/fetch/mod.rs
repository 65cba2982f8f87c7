pub mod error;
pub mod http_fetcher;

pub use error::FetchError;
pub use http_fetcher::{HttpFetcher, PageFetcher};
