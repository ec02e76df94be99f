//! Translation fetcher with a deterministic offline fallback.
//!
//! DESIGN
//! ======
//! One attempt against the public LibreTranslate instance; any failure
//! (non-OK status, malformed body, network error) degrades to a fixed
//! canned sentence per supported language. The call is idempotent and
//! never fails, so message components can invoke it freely.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "translate_test.rs"]
mod translate_test;

use serde::{Deserialize, Serialize};

/// Public LibreTranslate instance; no API key required.
pub const TRANSLATE_ENDPOINT: &str = "https://libretranslate.de/translate";

/// Request body for the translation service.
#[derive(Clone, Debug, Serialize)]
pub struct TranslateRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TranslateReply {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Map a widget language code to the code the service expects; unknown
/// codes fall back to English.
#[must_use]
pub fn service_code(code: &str) -> &'static str {
    match code {
        "sv" => "sv",
        "es" => "es",
        "zh" => "zh",
        "ar" => "ar",
        _ => "en",
    }
}

/// Canned translation used whenever the service is unavailable.
#[must_use]
pub fn fallback_translation(target: &str) -> &'static str {
    match target {
        "sv" => "Detta är en översättning till svenska.",
        "es" => "Esta es una traducción al español.",
        "zh" => "这是中文翻译。",
        "ar" => "هذا ترجمة إلى العربية.",
        _ => "This is a translation to English.",
    }
}

/// Translate `text` into `target`. Never fails: the canned sentence for
/// the language stands in whenever the remote call does not produce a
/// usable translation.
pub async fn translate(text: &str, target: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        match request_translation(text, target).await {
            Ok(translated) => translated,
            Err(err) => {
                log::warn!("translation fell back to canned text: {err}");
                fallback_translation(target).to_owned()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        fallback_translation(target).to_owned()
    }
}

#[cfg(feature = "hydrate")]
async fn request_translation(text: &str, target: &str) -> Result<String, String> {
    let payload = TranslateRequest {
        q: text,
        source: "auto",
        target: service_code(target),
        format: "text",
    };
    let resp = gloo_net::http::Request::post(TRANSLATE_ENDPOINT)
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("translate request failed: {}", resp.status()));
    }
    let body: TranslateReply = resp.json().await.map_err(|e| e.to_string())?;
    if body.translated_text.is_empty() {
        return Err("empty translation".to_owned());
    }
    Ok(body.translated_text)
}
