//! In-memory stand-ins for the network collaborators.

use crate::fetch::{FetchError, PageFetcher};
use crate::geocoding::{GeocodeHit, Geocoder, LanguageDetector, TranslationError, Translator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::{self, Cursor, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn unreachable(url: &str) -> FetchError {
    FetchError::Transfer {
        url: url.to_string(),
        source: io::Error::new(io::ErrorKind::ConnectionRefused, "no route in test fixture"),
    }
}

/// Serves pages and files from memory; unknown URLs fail like a refused connection.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_file(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(url.to_string(), bytes);
        self
    }

    /// Every URL asked for so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.requested.lock().unwrap().push(url.to_string());
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.record(url);
        self.pages.get(url).cloned().ok_or_else(|| unreachable(url))
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<u64, FetchError> {
        self.record(url);
        let bytes = self.files.get(url).ok_or_else(|| unreachable(url))?;
        tokio::fs::write(destination, bytes)
            .await
            .map_err(|source| FetchError::WriteIo {
                url: url.to_string(),
                path: destination.to_path_buf(),
                source,
            })?;
        Ok(bytes.len() as u64)
    }
}

/// Answers every page with an empty region index after `delay`, tracking how
/// many requests overlap.
pub struct SlowFetcher {
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl SlowFetcher {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Highest number of requests that were in flight at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for SlowFetcher {
    async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(region_index_html(&[]))
    }

    async fn download(&self, url: &str, _destination: &Path) -> Result<u64, FetchError> {
        Err(unreachable(url))
    }
}

enum GeocodeOutcome {
    Found(GeocodeHit),
    Empty,
    Unreachable,
}

pub struct StaticGeocoder {
    outcome: GeocodeOutcome,
    queries: Mutex<Vec<String>>,
}

impl StaticGeocoder {
    fn with(outcome: GeocodeOutcome) -> Self {
        Self {
            outcome,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn found(hit: GeocodeHit) -> Self {
        Self::with(GeocodeOutcome::Found(hit))
    }

    pub fn empty() -> Self {
        Self::with(GeocodeOutcome::Empty)
    }

    pub fn unreachable() -> Self {
        Self::with(GeocodeOutcome::Unreachable)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, FetchError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.outcome {
            GeocodeOutcome::Found(hit) => Ok(Some(hit.clone())),
            GeocodeOutcome::Empty => Ok(None),
            GeocodeOutcome::Unreachable => Err(unreachable("https://geocoder.test/search")),
        }
    }
}

/// Reports the same language for every text.
pub struct FixedDetector(Option<String>);

impl FixedDetector {
    pub fn new(language: Option<&str>) -> Self {
        Self(language.map(str::to_string))
    }
}

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        self.0.clone()
    }
}

/// Translates from a fixed table; anything else comes back empty.
pub struct TableTranslator(HashMap<String, String>);

impl TableTranslator {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }
}

#[async_trait]
impl Translator for TableTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslationError> {
        self.0
            .get(text)
            .cloned()
            .ok_or_else(|| TranslationError::EmptyTranslation(text.to_string()))
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::Request(unreachable(
            "https://translate.test/translate_a/single",
        )))
    }
}

/// A zip archive holding `files` as `(name, contents)` pairs.
pub fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A region index page listing `countries` as `(code, name)` pairs.
pub fn region_index_html(countries: &[(&str, &str)]) -> String {
    let links: String = countries
        .iter()
        .map(|(code, name)| format!("<li><a href=\"{code}_{name}/index.html\">{name}</a></li>\n"))
        .collect();
    format!(
        "<html><body><a href=\"../default.html\">Home</a>\n<ul>\n{links}</ul></body></html>"
    )
}

/// A country page listing `archives` as download links.
pub fn country_page_html(archives: &[&str]) -> String {
    let links: String = archives
        .iter()
        .map(|href| format!("<tr><td><a href=\"{href}\">{href}</a></td></tr>\n"))
        .collect();
    format!(
        "<html><body><a href=\"../default.html\">Region</a>\n<table>\n{links}</table></body></html>"
    )
}
