use crate::catalog::error::CatalogError;
use crate::catalog::html::extract_hrefs;
use crate::classification::WmoRegion;
use crate::fetch::PageFetcher;
use futures_util::{stream, StreamExt, TryStreamExt};
use log::{debug, info};
use std::time::Duration;

/// A country listed on a region index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalogEntry {
    /// Short code the provider prefixes the country directory with, e.g. `"FRA"`.
    pub provider_code: String,
    pub country_name: String,
}

/// The countries of one WMO region, in page order and unique by provider code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    pub region: WmoRegion,
    entries: Vec<RegionCatalogEntry>,
}

impl RegionCatalog {
    pub fn new(region: WmoRegion) -> Self {
        Self {
            region,
            entries: Vec::new(),
        }
    }

    /// Builds a catalog from the links of a region index page, skipping every
    /// link that is not a country directory.
    pub fn from_links<I, S>(region: WmoRegion, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new(region);
        for entry in hrefs
            .into_iter()
            .filter_map(|href| parse_catalog_link(href.as_ref()))
        {
            catalog.insert(entry);
        }
        catalog
    }

    /// Adds `entry`; a code that is already present keeps its position and
    /// takes the new name.
    pub fn insert(&mut self, entry: RegionCatalogEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.provider_code == entry.provider_code)
        {
            Some(existing) => existing.country_name = entry.country_name,
            None => self.entries.push(entry),
        }
    }

    pub fn entries(&self) -> &[RegionCatalogEntry] {
        &self.entries
    }

    pub fn country_name(&self, provider_code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.provider_code == provider_code)
            .map(|entry| entry.country_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a region index link of the form `<code>_<name>/.../index.html`.
///
/// ```
/// use epw_finder::parse_catalog_link;
///
/// let entry = parse_catalog_link("FRA_France/index.html").unwrap();
/// assert_eq!(entry.provider_code, "FRA");
/// assert_eq!(entry.country_name, "France");
///
/// assert!(parse_catalog_link("../default.html").is_none());
/// ```
pub fn parse_catalog_link(href: &str) -> Option<RegionCatalogEntry> {
    if !href.ends_with("/index.html") {
        return None;
    }
    let directory = href.split('/').next()?;
    let (code, name) = directory.split_once('_')?;
    if code.is_empty() || name.is_empty() {
        return None;
    }
    Some(RegionCatalogEntry {
        provider_code: code.to_string(),
        country_name: name.to_string(),
    })
}

/// Fetches and parses the country index of one region.
pub async fn fetch_region_catalog(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    region: WmoRegion,
) -> Result<RegionCatalog, CatalogError> {
    let url = region.index_url(base_url);
    debug!("Fetching region index {}", url);
    let html = fetcher
        .fetch_text(&url)
        .await
        .map_err(|source| CatalogError::CatalogFetchFailed {
            url: url.clone(),
            source,
        })?;

    let catalog = RegionCatalog::from_links(region, extract_hrefs(&html));
    info!("{} lists {} countries", region, catalog.len());
    Ok(catalog)
}

/// Fetches all seven region catalogs with at most `max_parallel` requests in
/// flight and returns them in region-number order.
///
/// The first failure, or exceeding `timeout` overall, aborts the remaining fetches.
pub async fn fetch_region_catalogs(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    max_parallel: usize,
    timeout: Duration,
) -> Result<Vec<RegionCatalog>, CatalogError> {
    let fetches = stream::iter(WmoRegion::ALL)
        .map(|region| fetch_region_catalog(fetcher, base_url, region))
        .buffer_unordered(max_parallel.max(1))
        .try_collect::<Vec<_>>();

    let mut catalogs = tokio::time::timeout(timeout, fetches)
        .await
        .map_err(|_| CatalogError::CatalogTimeout { timeout })??;
    catalogs.sort_by_key(|catalog| catalog.region);
    Ok(catalogs)
}
