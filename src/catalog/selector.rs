use crate::catalog::dataset::{CityDatasets, DatasetCandidate};
use crate::catalog::error::CatalogError;
use crate::fuzzy::best_match;
use log::{debug, info};

/// The dataset chosen for a city query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDataset {
    /// City name as listed by the provider.
    pub city: String,
    pub candidate: DatasetCandidate,
    pub country_page_url: String,
    pub score: u8,
}

/// Picks the most recent dataset of the city that best matches `city`.
///
/// The match must score strictly above `threshold`.
pub fn select_dataset(
    city: &str,
    datasets: &CityDatasets,
    country_page_url: &str,
    threshold: u8,
) -> Result<SelectedDataset, CatalogError> {
    let no_match = || CatalogError::NoMatchingCityDataset {
        city: city.to_string(),
    };

    let best = best_match(city, datasets.groups(), |group| group.city.as_str()).ok_or_else(no_match)?;
    debug!("'{}' best matches '{}' ({})", city, best.value.city, best.score);
    if best.score <= threshold {
        return Err(no_match());
    }

    let group = best.value;
    let candidate = group.latest().clone();
    info!(
        "Selected weather file {} ({})",
        candidate.raw_filename, candidate.year_range
    );
    Ok(SelectedDataset {
        city: group.city.clone(),
        candidate,
        country_page_url: country_page_url.to_string(),
        score: best.score,
    })
}
