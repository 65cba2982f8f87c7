use crate::geocoding::error::GeocodeError;
use crate::geocoding::geocoder::Geocoder;
use crate::geocoding::translation::{normalize_to_english, LanguageDetector, Translator};
use log::{info, warn};

/// Resolves the English name of the country `city` lies in.
///
/// A blank query fails without contacting the geocoder. Translation problems
/// are not fatal: the country is then returned as the geocoder spelled it.
pub async fn locate_country(
    geocoder: &dyn Geocoder,
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
    city: &str,
) -> Result<String, GeocodeError> {
    let query = city.trim();
    if query.is_empty() {
        return Err(GeocodeError::NotFound(city.to_string()));
    }

    let hit = geocoder
        .geocode(query)
        .await
        .map_err(|source| GeocodeError::Service {
            query: query.to_string(),
            source,
        })?
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

    let raw_country = hit
        .country_name()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

    let country = match normalize_to_english(detector, translator, raw_country).await {
        Ok(country) => country,
        Err(e) => {
            warn!(
                "Translation unavailable for '{}', keeping it untranslated: {}",
                raw_country, e
            );
            raw_country.to_string()
        }
    };
    info!("{} is in {}", query, country);
    Ok(country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::geocoding::geocoder::GeocodeHit;
    use crate::testing::{FailingTranslator, FixedDetector, StaticGeocoder, TableTranslator};

    fn hit(country: &str) -> GeocodeHit {
        GeocodeHit {
            display_name: format!("Somewhere, {country}"),
            country: Some(country.to_string()),
        }
    }

    #[tokio::test]
    async fn test_locate_country_in_english() -> Result<(), GeocodeError> {
        let geocoder = StaticGeocoder::found(hit("France"));
        let country = locate_country(
            &geocoder,
            &FixedDetector::new(Some("en")),
            &FailingTranslator,
            "Paris",
        )
        .await?;
        assert_eq!(country, "France");
        assert_eq!(geocoder.queries(), vec!["Paris".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_locate_country_translates_foreign_name() -> Result<(), GeocodeError> {
        let geocoder = StaticGeocoder::found(hit("Deutschland"));
        let translator = TableTranslator::new(&[("Deutschland", "Germany")]);
        let country = locate_country(
            &geocoder,
            &FixedDetector::new(Some("de")),
            &translator,
            "  München ",
        )
        .await?;
        assert_eq!(country, "Germany");
        assert_eq!(geocoder.queries(), vec!["München".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_translation_failure_keeps_untranslated_name() -> Result<(), GeocodeError> {
        let geocoder = StaticGeocoder::found(hit("Deutschland"));
        let country = locate_country(
            &geocoder,
            &FixedDetector::new(Some("de")),
            &FailingTranslator,
            "München",
        )
        .await?;
        assert_eq!(country, "Deutschland");
        Ok(())
    }

    #[tokio::test]
    async fn test_no_geocoding_result() {
        let geocoder = StaticGeocoder::empty();
        let err = locate_country(
            &geocoder,
            &FixedDetector::new(Some("en")),
            &FailingTranslator,
            "Xqzzyville",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GeocodeError::NotFound(_)));
        assert_eq!(err.kind(), FailureKind::GeocodeNotFound);
    }

    #[tokio::test]
    async fn test_geocoder_transport_error() {
        let geocoder = StaticGeocoder::unreachable();
        let err = locate_country(
            &geocoder,
            &FixedDetector::new(Some("en")),
            &FailingTranslator,
            "Paris",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GeocodeError::Service { .. }));
        assert_eq!(err.kind(), FailureKind::GeocodeNotFound);
    }

    #[tokio::test]
    async fn test_blank_query_skips_geocoder() {
        let geocoder = StaticGeocoder::found(hit("France"));
        let err = locate_country(
            &geocoder,
            &FixedDetector::new(Some("en")),
            &FailingTranslator,
            "   ",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GeocodeError::NotFound(_)));
        assert!(geocoder.queries().is_empty());
    }
}
