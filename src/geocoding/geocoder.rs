use crate::fetch::http_fetcher::{build_client, send_checked};
use crate::fetch::FetchError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// The single best match a geocoding service returned for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeHit {
    /// Full human-readable address, e.g. `"Paris, Île-de-France, France métropolitaine, France"`.
    pub display_name: String,
    /// Country from the structured address components, when the service provided one.
    pub country: Option<String>,
}

impl GeocodeHit {
    /// The country of this hit.
    ///
    /// Prefers the structured address component and falls back to the last
    /// comma-separated part of the display name.
    ///
    /// ```
    /// use epw_finder::GeocodeHit;
    ///
    /// let hit = GeocodeHit {
    ///     display_name: "Lagos, Lagos Island, Nigeria".to_string(),
    ///     country: None,
    /// };
    /// assert_eq!(hit.country_name(), Some("Nigeria"));
    /// ```
    pub fn country_name(&self) -> Option<&str> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or_else(|| {
                self.display_name
                    .rsplit(',')
                    .next()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
            })
    }
}

/// Maps free text to the best matching place.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns `Ok(None)` when the service knows no place for `query`.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    #[serde(default)]
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    country: Option<String>,
}

/// [`Geocoder`] using the OpenStreetMap Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
    language: String,
}

impl NominatimGeocoder {
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        language: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(user_agent, timeout)?,
            endpoint: endpoint.to_string(),
            language: language.to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, FetchError> {
        let request = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT_LANGUAGE, self.language.as_str())
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ]);
        let response = send_checked(request, &self.endpoint).await?;
        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(self.endpoint.clone(), e))?;
        debug!("Nominatim returned {} place(s) for '{}'", places.len(), query);

        Ok(places.into_iter().next().map(|place| GeocodeHit {
            display_name: place.display_name,
            country: place.address.and_then(|a| a.country),
        }))
    }
}
