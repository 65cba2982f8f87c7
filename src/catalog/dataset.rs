//! Dataset listings of a country page.
//!
//! Archive links look like
//! `IDF_Ile-de-France/FRA_IDF_Paris.Orly.AP.071490_TMYx.2009-2023.zip`: an
//! optional subdivision directory, then `<country>_<subdivision>_<station>`
//! followed by `_TMYx` and an optional observation year range.

use crate::catalog::error::CatalogError;
use crate::catalog::html::{archive_links, file_name_of};
use crate::fetch::PageFetcher;
use log::{debug, info};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Observation period of a dataset.
///
/// `Unknown` sorts below every span; spans compare by start year, then end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YearRange {
    Unknown,
    Span { start: u16, end: u16 },
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearRange::Unknown => f.write_str("unknown"),
            YearRange::Span { start, end } => write!(f, "{start:04}-{end:04}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCandidate {
    /// The listing href, as it appears on the country page.
    pub raw_filename: String,
    pub city_name: String,
    pub year_range: YearRange,
}

fn dataset_pattern() -> &'static Regex {
    static DATASET_RE: OnceLock<Regex> = OnceLock::new();
    DATASET_RE.get_or_init(|| {
        Regex::new(r"(.*?)_TMYx\.(?:(\d{4})-(\d{4}))?").expect("valid dataset pattern")
    })
}

/// Parses a listing href into a candidate.
///
/// Returns `None` for links that are not TMYx archives or whose name carries
/// no usable city.
///
/// The city is the text after the subdivision segment, so `city` stays part
/// of the name below.
///
/// ```
/// use epw_finder::{parse_dataset_link, YearRange};
///
/// let candidate = parse_dataset_link("US_CA_city.A.Name_TMYx.2009-2023.zip").unwrap();
/// assert_eq!(candidate.city_name, "city A Name");
/// assert_eq!(candidate.year_range, YearRange::Span { start: 2009, end: 2023 });
/// ```
pub fn parse_dataset_link(href: &str) -> Option<DatasetCandidate> {
    let captures = dataset_pattern().captures(href)?;
    let raw_name = captures.get(1)?.as_str();
    let year_range = match (captures.get(2), captures.get(3)) {
        (Some(start), Some(end)) => YearRange::Span {
            start: start.as_str().parse().ok()?,
            end: end.as_str().parse().ok()?,
        },
        _ => YearRange::Unknown,
    };
    let city_name = extract_city_name(raw_name)?;

    Some(DatasetCandidate {
        raw_filename: href.to_string(),
        city_name,
        year_range,
    })
}

/// City part of a raw dataset name such as `FRA_IDF_Paris.Orly.AP.071490`.
///
/// The country and subdivision segments are dropped, only the text after the
/// last remaining underscore is kept, and the station number and anything
/// after it are cut off.
pub fn extract_city_name(raw_name: &str) -> Option<String> {
    let mut segments = file_name_of(raw_name).splitn(3, '_');
    let _country = segments.next()?;
    let _subdivision = segments.next()?;
    let rest = segments.next()?;
    let station = rest.rsplit('_').next().unwrap_or(rest);

    let end = station
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(station.len());
    let city = normalize_city_name(&station[..end]);
    (!city.is_empty()).then_some(city)
}

/// Turns periods into spaces and strips surrounding whitespace and any
/// trailing `" TMYx"` marker. Idempotent.
///
/// ```
/// use epw_finder::normalize_city_name;
///
/// assert_eq!(normalize_city_name("Paris.Orly.AP."), "Paris Orly AP");
/// assert_eq!(normalize_city_name("Berlin TMYx"), "Berlin");
/// ```
pub fn normalize_city_name(name: &str) -> String {
    let replaced = name.replace('.', " ");
    let mut city = replaced.trim();
    while let Some(stripped) = city.strip_suffix(" TMYx") {
        city = stripped.trim_end();
    }
    city.to_string()
}

/// All datasets of one city, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityDatasetGroup {
    pub city: String,
    candidates: Vec<DatasetCandidate>,
}

impl CityDatasetGroup {
    fn new(first: DatasetCandidate) -> Self {
        Self {
            city: first.city_name.clone(),
            candidates: vec![first],
        }
    }

    fn push(&mut self, candidate: DatasetCandidate) {
        self.candidates.push(candidate);
        // Stable: equal ranges keep listing order.
        self.candidates
            .sort_by(|a, b| b.year_range.cmp(&a.year_range));
    }

    pub fn candidates(&self) -> &[DatasetCandidate] {
        &self.candidates
    }

    /// The dataset with the most recent year range.
    pub fn latest(&self) -> &DatasetCandidate {
        &self.candidates[0]
    }
}

/// Datasets of a country page grouped by city, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityDatasets {
    groups: Vec<CityDatasetGroup>,
}

impl CityDatasets {
    /// Groups the parsable archive links among `hrefs`.
    pub fn from_links<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut datasets = Self::default();
        for href in hrefs {
            match parse_dataset_link(href.as_ref()) {
                Some(candidate) => datasets.insert(candidate),
                None => debug!("Skipping unrecognized dataset link {}", href.as_ref()),
            }
        }
        datasets
    }

    pub fn insert(&mut self, candidate: DatasetCandidate) {
        match self
            .groups
            .iter_mut()
            .find(|group| group.city == candidate.city_name)
        {
            Some(group) => group.push(candidate),
            None => self.groups.push(CityDatasetGroup::new(candidate)),
        }
    }

    pub fn groups(&self) -> &[CityDatasetGroup] {
        &self.groups
    }

    pub fn get(&self, city: &str) -> Option<&CityDatasetGroup> {
        self.groups.iter().find(|group| group.city == city)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Fetches a country page and groups its dataset archives by city.
pub async fn fetch_city_datasets(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<CityDatasets, CatalogError> {
    let html = fetcher
        .fetch_text(url)
        .await
        .map_err(|source| CatalogError::CatalogFetchFailed {
            url: url.to_string(),
            source,
        })?;

    let links = archive_links(&html);
    if links.is_empty() {
        return Err(CatalogError::NoDatasetsFound {
            url: url.to_string(),
        });
    }

    let datasets = CityDatasets::from_links(&links);
    info!(
        "{} lists {} archives for {} cities",
        url,
        links.len(),
        datasets.len()
    );
    Ok(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::testing::{country_page_html, StaticFetcher};

    #[test]
    fn test_year_range_order() {
        let newer = YearRange::Span {
            start: 2007,
            end: 2021,
        };
        let older = YearRange::Span {
            start: 2004,
            end: 2018,
        };
        assert!(newer > older);
        assert!(older > YearRange::Unknown);
        assert_eq!(newer.to_string(), "2007-2021");
        assert_eq!(YearRange::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_parse_real_listing_href() {
        let candidate =
            parse_dataset_link("IDF_Ile-de-France/FRA_IDF_Paris.Orly.AP.071490_TMYx.2009-2023.zip")
                .unwrap();
        assert_eq!(candidate.city_name, "Paris Orly AP");
        assert_eq!(
            candidate.year_range,
            YearRange::Span {
                start: 2009,
                end: 2023
            }
        );
        assert_eq!(
            candidate.raw_filename,
            "IDF_Ile-de-France/FRA_IDF_Paris.Orly.AP.071490_TMYx.2009-2023.zip"
        );
    }

    #[test]
    fn test_parse_without_year_range() {
        let candidate = parse_dataset_link("DEU_BE_Berlin-Tegel.AP.103820_TMYx.zip").unwrap();
        assert_eq!(candidate.city_name, "Berlin-Tegel AP");
        assert_eq!(candidate.year_range, YearRange::Unknown);
    }

    #[test]
    fn test_parse_rejects_other_links() {
        assert!(parse_dataset_link("FRA_IDF_Paris.Orly.AP.071490_TMY3.zip").is_none());
        assert!(parse_dataset_link("FRA_Paris_TMYx.zip").is_none());
        assert!(parse_dataset_link("FRA_IDF_071490_TMYx.zip").is_none());
    }

    #[test]
    fn test_extract_city_name_keeps_last_segment() {
        assert_eq!(
            extract_city_name("USA_NY_New.York-Kennedy_Intl.AP.744860").as_deref(),
            Some("Intl AP")
        );
        assert_eq!(
            extract_city_name("ESP_MD_Madrid.Barajas.AP.082210").as_deref(),
            Some("Madrid Barajas AP")
        );
    }

    #[test]
    fn test_normalize_city_name_is_idempotent() {
        for raw in ["Paris.Orly.AP.", " Lyon TMYx ", "Nice TMYx TMYx", "Oslo"] {
            let once = normalize_city_name(raw);
            assert_eq!(normalize_city_name(&once), once);
        }
        assert_eq!(normalize_city_name("Nice TMYx TMYx"), "Nice");
    }

    #[test]
    fn test_groups_keep_latest_first() {
        let datasets = CityDatasets::from_links([
            "R/FRA_R_City.AP.1_TMYx.zip",
            "R/FRA_R_City.AP.1_TMYx.2004-2018.zip",
            "R/FRA_R_Other.2_TMYx.2009-2023.zip",
            "R/FRA_R_City.AP.1_TMYx.2007-2021.zip",
            "index.html",
        ]);
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets.groups()[0].city, "City AP");
        assert_eq!(datasets.groups()[1].city, "Other");

        let city = datasets.get("City AP").unwrap();
        let ranges: Vec<String> = city
            .candidates()
            .iter()
            .map(|c| c.year_range.to_string())
            .collect();
        assert_eq!(ranges, vec!["2007-2021", "2004-2018", "unknown"]);
        assert_eq!(city.latest().raw_filename, "R/FRA_R_City.AP.1_TMYx.2007-2021.zip");
    }

    #[tokio::test]
    async fn test_fetch_city_datasets() -> Result<(), CatalogError> {
        let url = "https://climate.example.org/WMO_Region_6_Europe/FRA_France/index.html";
        let fetcher = StaticFetcher::new().with_page(
            url,
            &country_page_html(&[
                "IDF_Ile-de-France/FRA_IDF_Paris.Orly.AP.071490_TMYx.2009-2023.zip",
                "IDF_Ile-de-France/FRA_IDF_Paris.Orly.AP.071490_TMYx.2004-2018.zip",
            ]),
        );
        let datasets = fetch_city_datasets(&fetcher, url).await?;
        assert_eq!(datasets.len(), 1);
        assert_eq!(
            datasets.groups()[0].latest().year_range.to_string(),
            "2009-2023"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_page_without_archives() {
        let url = "https://climate.example.org/empty/index.html";
        let fetcher = StaticFetcher::new().with_page(url, &country_page_html(&[]));
        let err = fetch_city_datasets(&fetcher, url).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::NoDatasetsFound);
    }

    #[tokio::test]
    async fn test_unreachable_country_page() {
        let fetcher = StaticFetcher::new();
        let err = fetch_city_datasets(&fetcher, "https://climate.example.org/x/index.html")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::CatalogFetchFailed);
    }
}
