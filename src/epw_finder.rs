//! Main entry point: resolving a city name to a local EPW weather file.

use crate::archive::ArchiveFetcher;
use crate::catalog::{
    fetch_city_datasets, fetch_region_catalogs, resolve_country_page, select_dataset, CountryPage,
    SelectedDataset,
};
use crate::classification::{classify, ResolvedLocation};
use crate::config::FinderConfig;
use crate::error::EpwFinderError;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::geocoding::{
    locate_country, GoogleTranslator, Geocoder, LanguageDetector, NominatimGeocoder, Translator,
    WhatlangDetector,
};
use crate::utils::{ensure_dir_exists, get_work_dir};
use bon::bon;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

const DOWNLOAD_DIR_NAME: &str = "downloads";
const EXTRACT_DIR_NAME: &str = "weather_data";

/// Everything the pipeline worked out for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub query: String,
    pub location: ResolvedLocation,
    pub country_page: CountryPage,
    pub dataset: SelectedDataset,
    /// Absolute path of the extracted weather file.
    pub payload: PathBuf,
}

/// Resolves city names to EPW weather files from climate.onebuilding.org.
///
/// Archives are downloaded to `<work dir>/downloads`, extracted into
/// `<work dir>/downloads/weather_data` and then deleted. The extraction directory only ever
/// holds the files of the most recent resolution, so a returned path stays
/// valid until the next call on the same finder.
///
/// # Examples
///
/// ```no_run
/// # use epw_finder::{EpwFinder, EpwFinderError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), EpwFinderError> {
/// let finder = EpwFinder::new().await?;
/// let epw = finder.resolve_city_to_weather_file("Paris").await?;
/// println!("Weather file: {}", epw.display());
/// # Ok(())
/// # }
/// ```
pub struct EpwFinder {
    config: FinderConfig,
    work_dir: PathBuf,
    geocoder: Arc<dyn Geocoder>,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
    fetcher: Arc<dyn PageFetcher>,
    archives: ArchiveFetcher,
    // Resolutions share the extraction directory.
    archive_lock: Mutex<()>,
}

#[bon]
impl EpwFinder {
    /// Creates a finder working in `epw_finder` under the platform cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`EpwFinderError::WorkDirResolution`] if the platform has no cache
    /// directory and [`EpwFinderError::WorkDirCreation`] if it cannot be created.
    pub async fn new() -> Result<Self, EpwFinderError> {
        let work_dir = get_work_dir().ok_or(EpwFinderError::WorkDirResolution)?;
        Self::with_work_dir(work_dir).await
    }

    /// Creates a finder with default settings working in `work_dir`, which is
    /// created if needed.
    pub async fn with_work_dir(work_dir: impl Into<PathBuf>) -> Result<Self, EpwFinderError> {
        Self::builder().work_dir(work_dir.into()).build().await
    }

    /// Creates a finder with custom settings or collaborators.
    ///
    /// * `.work_dir(path)`: **Required.** Where archives are downloaded and extracted.
    /// * `.config(FinderConfig)`: Optional, defaults to [`FinderConfig::default`].
    /// * `.geocoder(..)`, `.detector(..)`, `.translator(..)`, `.fetcher(..)`:
    ///   Optional replacements for the Nominatim geocoder, the `whatlang`
    ///   detector, the Google translator and the HTTP page fetcher.
    ///
    /// ```no_run
    /// # use epw_finder::{EpwFinder, EpwFinderError, FinderConfig};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), EpwFinderError> {
    /// let finder = EpwFinder::builder()
    ///     .work_dir("/tmp/epw")
    ///     .config(FinderConfig::builder().user_agent("my-tool/0.3").build())
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder(builder_type = EpwFinderBuilder, finish_fn = build)]
    pub async fn builder(
        #[builder(into)] work_dir: PathBuf,
        config: Option<FinderConfig>,
        geocoder: Option<Arc<dyn Geocoder>>,
        detector: Option<Arc<dyn LanguageDetector>>,
        translator: Option<Arc<dyn Translator>>,
        fetcher: Option<Arc<dyn PageFetcher>>,
    ) -> Result<Self, EpwFinderError> {
        let config = config.unwrap_or_default();
        ensure_dir_exists(&work_dir)
            .await
            .map_err(|e| EpwFinderError::WorkDirCreation(work_dir.clone(), e))?;

        let geocoder: Arc<dyn Geocoder> = match geocoder {
            Some(geocoder) => geocoder,
            None => Arc::new(
                NominatimGeocoder::new(
                    &config.geocoder_endpoint,
                    &config.user_agent,
                    &config.language,
                    config.request_timeout,
                )
                .map_err(EpwFinderError::Client)?,
            ),
        };
        let detector: Arc<dyn LanguageDetector> = detector.unwrap_or_else(|| Arc::new(WhatlangDetector));
        let translator: Arc<dyn Translator> = match translator {
            Some(translator) => translator,
            None => Arc::new(
                GoogleTranslator::new(
                    &config.translator_endpoint,
                    &config.user_agent,
                    config.request_timeout,
                )
                .map_err(EpwFinderError::Client)?,
            ),
        };
        let fetcher: Arc<dyn PageFetcher> = match fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(
                HttpFetcher::new(&config.user_agent, config.request_timeout)
                    .map_err(EpwFinderError::Client)?,
            ),
        };

        let download_dir = work_dir.join(DOWNLOAD_DIR_NAME);
        let archives = ArchiveFetcher::new(
            fetcher.clone(),
            download_dir.clone(),
            download_dir.join(EXTRACT_DIR_NAME),
            &config.payload_extension,
            config.match_threshold,
        );

        Ok(Self {
            config,
            work_dir,
            geocoder,
            detector,
            translator,
            fetcher,
            archives,
            archive_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Runs the whole pipeline for `city` and returns every intermediate result.
    ///
    /// Stages run in order and the first failure ends the resolution:
    /// geocoding, classification, region catalogs, country page, dataset
    /// listing, dataset selection, then download and extraction.
    pub async fn resolve(&self, city: &str) -> Result<Resolution, EpwFinderError> {
        info!("Resolving weather file for '{}'", city);
        let country = locate_country(
            self.geocoder.as_ref(),
            self.detector.as_ref(),
            self.translator.as_ref(),
            city,
        )
        .await?;
        let location = classify(&country)?;

        let threshold = self.config.match_threshold;
        let base_url = &self.config.catalog_base_url;
        let catalogs = fetch_region_catalogs(
            self.fetcher.as_ref(),
            base_url,
            self.config.max_parallel_fetches,
            self.config.catalog_timeout,
        )
        .await?;
        let country_page = resolve_country_page(&location, &catalogs, base_url, threshold)?;

        let datasets = fetch_city_datasets(self.fetcher.as_ref(), &country_page.url).await?;
        let dataset = select_dataset(city.trim(), &datasets, &country_page.url, threshold)?;

        let payload = {
            let _guard = self.archive_lock.lock().await;
            self.archives
                .fetch_payload(&country_page.url, &dataset.candidate.raw_filename)
                .await?
        };
        info!("EPW file for '{}' saved at {}", city, payload.display());

        Ok(Resolution {
            query: city.to_string(),
            location,
            country_page,
            dataset,
            payload,
        })
    }

    /// Resolves `city` to the absolute path of its extracted EPW file.
    ///
    /// # Errors
    ///
    /// Any stage failure, see [`EpwFinderError::kind`] for the failure category.
    pub async fn resolve_city_to_weather_file(&self, city: &str) -> Result<PathBuf, EpwFinderError> {
        self.resolve(city).await.map(|resolution| resolution.payload)
    }

    /// Like [`resolve_city_to_weather_file`](Self::resolve_city_to_weather_file),
    /// but logs the failure and returns `None` instead.
    pub async fn find_weather_file(&self, city: &str) -> Option<PathBuf> {
        match self.resolve(city).await {
            Ok(resolution) => Some(resolution.payload),
            Err(e) => {
                error!("No weather file for '{}' ({}): {}", city, e.kind(), e);
                None
            }
        }
    }
}
