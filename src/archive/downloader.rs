use crate::archive::error::ArchiveError;
use crate::archive::extractor::{clear_extraction_dir, extract_archive, locate_payload};
use crate::catalog::html::{archive_links, file_name_of};
use crate::fetch::{FetchError, PageFetcher};
use crate::fuzzy::best_match;
use log::{debug, info, warn};
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Downloads a dataset archive and extracts its payload into a work directory.
#[derive(Clone)]
pub struct ArchiveFetcher {
    fetcher: Arc<dyn PageFetcher>,
    download_dir: PathBuf,
    extract_dir: PathBuf,
    payload_extension: String,
    threshold: u8,
}

impl ArchiveFetcher {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        download_dir: PathBuf,
        extract_dir: PathBuf,
        payload_extension: &str,
        threshold: u8,
    ) -> Self {
        Self {
            fetcher,
            download_dir,
            extract_dir,
            payload_extension: payload_extension.trim_start_matches('.').to_string(),
            threshold,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn extract_dir(&self) -> &Path {
        &self.extract_dir
    }

    /// Finds the link on `page_url` whose file name best matches the file name
    /// of `archive_href` and returns its absolute URL together with that file name.
    pub async fn resolve_archive_url(
        &self,
        page_url: &str,
        archive_href: &str,
    ) -> Result<(String, String), ArchiveError> {
        let html = self
            .fetcher
            .fetch_text(page_url)
            .await
            .map_err(|source| ArchiveError::DownloadFailed {
                url: page_url.to_string(),
                source,
            })?;

        let wanted = file_name_of(archive_href);
        let links = archive_links(&html);
        let found = best_match(wanted, &links, |link| file_name_of(link))
            .filter(|found| found.score >= self.threshold)
            .ok_or_else(|| ArchiveError::ArchiveLinkNotFound {
                file_name: wanted.to_string(),
            })?;
        debug!("Archive link {} matches '{}' ({})", found.value, wanted, found.score);

        let url = Url::parse(page_url)
            .and_then(|base| base.join(found.value))
            .map_err(|e| ArchiveError::InvalidUrl {
                url: found.value.to_string(),
                reason: e.to_string(),
            })?;

        Ok((url.to_string(), file_name_of(found.value).to_string()))
    }

    /// Downloads the archive behind `archive_href` into the download directory.
    pub async fn download_archive(
        &self,
        page_url: &str,
        archive_href: &str,
    ) -> Result<PathBuf, ArchiveError> {
        let (url, file_name) = self.resolve_archive_url(page_url, archive_href).await?;
        let destination = self.download_dir.join(&file_name);

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|source| ArchiveError::DownloadFailed {
                url: url.clone(),
                source: FetchError::WriteIo {
                    url: url.clone(),
                    path: self.download_dir.clone(),
                    source,
                },
            })?;
        self.fetcher
            .download(&url, &destination)
            .await
            .map_err(|source| ArchiveError::DownloadFailed {
                url: url.clone(),
                source,
            })?;
        Ok(destination)
    }

    /// Downloads, extracts and locates the payload of `archive_href`.
    ///
    /// Files left in the extraction directory by an earlier run are removed
    /// before extracting, and the downloaded archive is deleted once it has
    /// been extracted.
    pub async fn fetch_payload(
        &self,
        page_url: &str,
        archive_href: &str,
    ) -> Result<PathBuf, ArchiveError> {
        let archive = self.download_archive(page_url, archive_href).await?;

        tokio::fs::create_dir_all(&self.extract_dir)
            .await
            .map_err(|e| ArchiveError::ExtractIo(self.extract_dir.clone(), e))?;
        let removed = clear_extraction_dir(&self.extract_dir).await;
        if removed > 0 {
            debug!("Removed {} stale files from {}", removed, self.extract_dir.display());
        }
        let extracted = extract_archive(&archive, &self.extract_dir).await;
        if let Err(e) = tokio::fs::remove_file(&archive).await {
            warn!("Could not remove archive {}: {}", archive.display(), e);
        }
        extracted?;

        let stem = archive
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let payload = locate_payload(&self.extract_dir, stem, &self.payload_extension).await?;
        info!("Weather file saved at {}", payload.display());
        Ok(payload)
    }
}
