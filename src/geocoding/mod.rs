pub mod country_locator;
pub mod error;
pub mod geocoder;
pub mod translation;

pub use country_locator::locate_country;
pub use error::{GeocodeError, TranslationError};
pub use geocoder::{GeocodeHit, Geocoder, NominatimGeocoder};
pub use translation::{
    normalize_to_english, GoogleTranslator, LanguageDetector, Translator, WhatlangDetector,
};
