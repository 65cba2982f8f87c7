//! Language detection and translation used to bring geocoder output into
//! English before it is matched against the English-only provider catalog.

use crate::fetch::http_fetcher::{build_client, send_checked};
use crate::fetch::FetchError;
use crate::geocoding::error::TranslationError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const ENGLISH: &str = "en";

/// Guesses the language of a short text.
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-1 code of the detected language, or `None` if undecided.
    fn detect(&self, text: &str) -> Option<String>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;
}

/// [`LanguageDetector`] backed by the `whatlang` trigram models.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        detected_code(info.lang(), info.is_reliable())
    }
}

/// Unreliable guesses count as undecided; short names are often misread.
fn detected_code(lang: whatlang::Lang, reliable: bool) -> Option<String> {
    if !reliable {
        debug!("Ignoring unreliable language guess {}", lang.code());
        return None;
    }
    // Languages without a two-letter code are left to the translator's auto-detection.
    Some(iso_639_1(lang.code()).unwrap_or("auto").to_string())
}

/// Maps the ISO 639-3 codes `whatlang` reports to the ISO 639-1 codes
/// translation services expect.
pub(crate) fn iso_639_1(code: &str) -> Option<&'static str> {
    let short = match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh-CN",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "iw",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jw",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "no",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        _ => return None,
    };
    Some(short)
}

/// [`Translator`] for the public Google Translate `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(user_agent, timeout)?,
            endpoint: endpoint.to_string(),
        })
    }
}

/// Concatenates the translated segments of a `translate_a/single` response,
/// which looks like `[[["Germany","Deutschland",null,null,10]],null,"de"]`.
fn collect_segments(body: &Value) -> String {
    body.get(0)
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let request = self.client.get(&self.endpoint).query(&[
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ]);
        let response = send_checked(request, &self.endpoint).await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(self.endpoint.clone(), e))?;

        let translated = collect_segments(&body);
        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslationError::EmptyTranslation(text.to_string()));
        }
        Ok(translated.to_string())
    }
}

/// Translates `text` into English unless it already is English or its
/// language cannot be detected.
pub async fn normalize_to_english(
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
    text: &str,
) -> Result<String, TranslationError> {
    let Some(language) = detector.detect(text) else {
        debug!("No language detected for '{}', keeping it as is", text);
        return Ok(text.to_string());
    };
    if language == ENGLISH {
        return Ok(text.to_string());
    }

    let translated = translator.translate(text, &language, ENGLISH).await?;
    debug!("Translated '{}' ({}) to '{}'", text, language, translated);
    Ok(translated)
}
