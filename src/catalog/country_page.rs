use crate::catalog::error::CatalogError;
use crate::catalog::region_catalog::{RegionCatalog, RegionCatalogEntry};
use crate::classification::{ResolvedLocation, WmoRegion};
use crate::fuzzy::{best_match, Scored};
use log::{debug, info, warn};

/// The provider page listing the datasets of one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPage {
    pub region: WmoRegion,
    pub provider_code: String,
    pub country_name: String,
    pub url: String,
    /// Fuzzy score of the catalog name against the geocoded country.
    pub score: u8,
}

/// Names the country is searched under: the geocoded spelling and the ISO
/// short name, without duplicates.
fn query_names(location: &ResolvedLocation) -> Vec<&str> {
    let mut names = vec![location.country.as_str()];
    if !location.iso_name.eq_ignore_ascii_case(&location.country) {
        names.push(location.iso_name);
    }
    names
}

fn best_in_catalog<'a>(
    names: &[&str],
    catalog: &'a RegionCatalog,
) -> Option<Scored<&'a RegionCatalogEntry>> {
    let mut best: Option<Scored<&'a RegionCatalogEntry>> = None;
    for name in names {
        let Some(candidate) = best_match(name, catalog.entries(), |e| e.country_name.as_str())
        else {
            continue;
        };
        debug!(
            "'{}' best matches '{}' in {} ({})",
            name, candidate.value.country_name, catalog.region, candidate.score
        );
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Finds the country page of `location` in the region catalogs.
///
/// The classified region is searched first. The other regions are only
/// consulted when it has no match scoring at least `threshold`, and a match
/// found there is logged.
pub fn resolve_country_page(
    location: &ResolvedLocation,
    catalogs: &[RegionCatalog],
    base_url: &str,
    threshold: u8,
) -> Result<CountryPage, CatalogError> {
    let names = query_names(location);
    let ordered = catalogs
        .iter()
        .filter(|catalog| catalog.region == location.region)
        .chain(
            catalogs
                .iter()
                .filter(|catalog| catalog.region != location.region),
        );

    for catalog in ordered {
        let Some(found) = best_in_catalog(&names, catalog) else {
            continue;
        };
        if found.score < threshold {
            continue;
        }

        let entry = found.value;
        if catalog.region != location.region {
            warn!(
                "{} not found in {}, using '{}' from {}",
                location.country, location.region, entry.country_name, catalog.region
            );
        }
        let url = catalog
            .region
            .country_page_url(base_url, &entry.provider_code, &entry.country_name);
        info!("Country page for {}: {}", location.country, url);
        return Ok(CountryPage {
            region: catalog.region,
            provider_code: entry.provider_code.clone(),
            country_name: entry.country_name.clone(),
            url,
            score: found.score,
        });
    }

    Err(CatalogError::CountryNotInCatalog {
        country: location.country.clone(),
    })
}
