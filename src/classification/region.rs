use crate::classification::countries::{lookup_country, CountryRecord};
use crate::classification::error::ClassifyError;
use log::info;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    /// Maps a two-letter continent code (`"EU"`, `"NA"`, ...) to a continent.
    pub fn from_code(code: &str) -> Option<Self> {
        let continent = match code.trim().to_ascii_uppercase().as_str() {
            "AF" => Continent::Africa,
            "AS" => Continent::Asia,
            "EU" => Continent::Europe,
            "NA" => Continent::NorthAmerica,
            "SA" => Continent::SouthAmerica,
            "OC" => Continent::Oceania,
            "AN" => Continent::Antarctica,
            _ => return None,
        };
        Some(continent)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The seven WMO regions the provider groups its catalog by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WmoRegion {
    Africa,
    Asia,
    SouthAmerica,
    NorthCentralAmerica,
    SouthWestPacific,
    Europe,
    Antarctica,
}

impl WmoRegion {
    /// All regions in region-number order.
    pub const ALL: [WmoRegion; 7] = [
        WmoRegion::Africa,
        WmoRegion::Asia,
        WmoRegion::SouthAmerica,
        WmoRegion::NorthCentralAmerica,
        WmoRegion::SouthWestPacific,
        WmoRegion::Europe,
        WmoRegion::Antarctica,
    ];

    pub fn number(&self) -> u8 {
        match self {
            WmoRegion::Africa => 1,
            WmoRegion::Asia => 2,
            WmoRegion::SouthAmerica => 3,
            WmoRegion::NorthCentralAmerica => 4,
            WmoRegion::SouthWestPacific => 5,
            WmoRegion::Europe => 6,
            WmoRegion::Antarctica => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WmoRegion::Africa => "Africa",
            WmoRegion::Asia => "Asia",
            WmoRegion::SouthAmerica => "South America",
            WmoRegion::NorthCentralAmerica => "North and Central America",
            WmoRegion::SouthWestPacific => "South-West Pacific",
            WmoRegion::Europe => "Europe",
            WmoRegion::Antarctica => "Antarctica",
        }
    }

    /// Directory of the region on the provider site.
    pub fn directory(&self) -> &'static str {
        match self {
            WmoRegion::Africa => "WMO_Region_1_Africa",
            WmoRegion::Asia => "WMO_Region_2_Asia",
            WmoRegion::SouthAmerica => "WMO_Region_3_South_America",
            WmoRegion::NorthCentralAmerica => "WMO_Region_4_North_and_Central_America",
            WmoRegion::SouthWestPacific => "WMO_Region_5_Southwest_Pacific",
            WmoRegion::Europe => "WMO_Region_6_Europe",
            WmoRegion::Antarctica => "WMO_Region_7_Antarctica",
        }
    }

    /// URL of the region's country index.
    ///
    /// ```
    /// use epw_finder::WmoRegion;
    ///
    /// assert_eq!(
    ///     WmoRegion::Europe.index_url("https://climate.onebuilding.org/"),
    ///     "https://climate.onebuilding.org/WMO_Region_6_Europe/default.html"
    /// );
    /// ```
    pub fn index_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/default.html",
            base_url.trim_end_matches('/'),
            self.directory()
        )
    }

    /// URL of a country page listed in this region's index.
    pub fn country_page_url(&self, base_url: &str, provider_code: &str, country_name: &str) -> String {
        format!(
            "{}/{}/{}_{}/index.html",
            base_url.trim_end_matches('/'),
            self.directory(),
            provider_code,
            country_name
        )
    }

    pub fn for_continent(continent: Continent) -> Self {
        match continent {
            Continent::Africa => WmoRegion::Africa,
            Continent::Asia => WmoRegion::Asia,
            Continent::Europe => WmoRegion::Europe,
            Continent::NorthAmerica => WmoRegion::NorthCentralAmerica,
            Continent::SouthAmerica => WmoRegion::SouthAmerica,
            Continent::Oceania => WmoRegion::SouthWestPacific,
            Continent::Antarctica => WmoRegion::Antarctica,
        }
    }
}

impl fmt::Display for WmoRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region {} ({})", self.number(), self.label())
    }
}

/// Countries whose provider region differs from their continent's, keyed by alpha-2 code.
const REGION_OVERRIDES: &[(&str, WmoRegion)] = &[
    ("TR", WmoRegion::Europe),
    ("RU", WmoRegion::Europe),
    ("CY", WmoRegion::Europe),
    ("AM", WmoRegion::Europe),
    ("AZ", WmoRegion::Europe),
    ("GE", WmoRegion::Europe),
    ("GL", WmoRegion::NorthCentralAmerica),
];

fn region_override(record: &CountryRecord) -> Option<WmoRegion> {
    REGION_OVERRIDES
        .iter()
        .find(|(alpha2, _)| *alpha2 == record.alpha2)
        .map(|(_, region)| *region)
}

/// Where a country sits, administratively and in the provider's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// Country name as it came out of geocoding.
    pub country: String,
    /// ISO 3166-1 short name.
    pub iso_name: &'static str,
    pub alpha2: &'static str,
    pub continent: Continent,
    pub region: WmoRegion,
}

/// Classifies a country name into its continent and WMO region.
///
/// ```
/// use epw_finder::{classify, WmoRegion};
///
/// let location = classify("Russia").unwrap();
/// assert_eq!(location.region, WmoRegion::Europe);
/// ```
pub fn classify(country: &str) -> Result<ResolvedLocation, ClassifyError> {
    let record = lookup_country(country)
        .ok_or_else(|| ClassifyError::CountryUnrecognized(country.to_string()))?;

    let continent =
        Continent::from_code(record.continent).ok_or_else(|| ClassifyError::ContinentUnresolved {
            country: record.name.to_string(),
            code: record.alpha2.to_string(),
        })?;

    let region = region_override(record).unwrap_or_else(|| WmoRegion::for_continent(continent));
    info!("{} ({}) is in {}", record.name, continent, region);

    Ok(ResolvedLocation {
        country: country.trim().to_string(),
        iso_name: record.name,
        alpha2: record.alpha2,
        continent,
        region,
    })
}
