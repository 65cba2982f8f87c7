use crate::fetch::error::FetchError;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::{Client, RequestBuilder, Response};
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio_util::io::StreamReader;

/// Source of catalog pages and archive downloads.
///
/// The pipeline only ever talks to the provider through this trait, so a
/// resolution can be driven entirely from memory in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Streams `url` into `destination`, returning the number of bytes written.
    async fn download(&self, url: &str, destination: &Path) -> Result<u64, FetchError>;
}

pub(crate) fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(FetchError::ClientBuild)
}

/// Sends `request` and turns non-success statuses into [`FetchError::HttpStatus`].
pub(crate) async fn send_checked(request: RequestBuilder, url: &str) -> Result<Response, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

    match response.error_for_status() {
        Ok(resp) => Ok(resp),
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            Err(if let Some(status) = e.status() {
                FetchError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                FetchError::NetworkRequest(url.to_string(), e)
            })
        }
    }
}

/// [`PageFetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(user_agent, timeout)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = send_checked(self.client.get(url), url).await?;
        response
            .text()
            .await
            .map_err(|e| FetchError::Body(url.to_string(), e))
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<u64, FetchError> {
        info!("Downloading {}", url);
        let response = send_checked(self.client.get(url), url).await?;

        let write_err = |source: io::Error| FetchError::WriteIo {
            url: url.to_string(),
            path: destination.to_path_buf(),
            source,
        };

        // A failed transfer must not leave a truncated archive under the final name.
        let staging_dir = destination.parent().unwrap_or_else(|| Path::new("."));
        let staging = tempfile::Builder::new()
            .prefix(".download-")
            .tempfile_in(staging_dir)
            .map_err(write_err)?;
        let (std_file, staging_path) = staging.into_parts();
        let mut file = tokio::fs::File::from_std(std_file);

        let stream = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
        let reader = StreamReader::new(stream);
        tokio::pin!(reader);

        let written = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(|e| FetchError::Transfer {
                url: url.to_string(),
                source: e,
            })?;
        file.flush().await.map_err(write_err)?;
        drop(file);

        staging_path
            .persist(destination)
            .map_err(|e| write_err(e.error))?;

        info!(
            "Downloaded {} bytes from {} to {}",
            written,
            url,
            destination.display()
        );
        Ok(written)
    }
}
