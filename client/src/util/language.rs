//! Supported languages and their fixed lookup tables.
//!
//! One table drives the selector UI, the speech-synthesis locale, and the
//! canned "language changed" notices, so a new language is added in one
//! place.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

/// A selectable language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered by the widget, in display order.
pub const LANGUAGES: [Language; 5] = [
    Language { code: "en", name: "English" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "es", name: "Spanish" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ar", name: "Arabic" },
];

/// Speech-recognition locale for microphone capture.
pub const RECOGNITION_LOCALE: &str = "sv-SE";

/// Speech-synthesis locale for a language code; unknown codes default to
/// US English.
#[must_use]
pub fn speech_locale(code: &str) -> &'static str {
    match code {
        "sv" => "sv-SE",
        "es" => "es-ES",
        "zh" => "zh-CN",
        "ar" => "ar-SA",
        _ => "en-US",
    }
}

/// Canned chat notice appended when the user switches language.
#[must_use]
pub fn change_notice(code: &str) -> &'static str {
    match code {
        "sv" => "Språket har ändrats till svenska.",
        "es" => "El idioma ha cambiado al español.",
        "zh" => "语言已更改为中文。",
        "ar" => "تم تغيير اللغة إلى العربية.",
        _ => "Language has been changed to English.",
    }
}
