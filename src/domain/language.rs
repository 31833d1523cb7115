//! Static lookups from human language names to locale codes and from locale
//! codes to synthesis voices.

/// Locale used when a language name is not recognized.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Voice used when a locale has no dedicated voice.
pub const DEFAULT_VOICE: &str = "Joanna";

/// Language names accepted by [`resolve_locale`], with the locale each maps to.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("spanish", "es-ES"),
    ("catalan", "ca-ES"),
    ("german", "de-DE"),
    ("english", "en-GB"),
    ("french", "fr-FR"),
];

/// Maps a free-text language name to a locale code.
///
/// Matching ignores surrounding whitespace and letter case. Unknown names
/// fall back to [`DEFAULT_LOCALE`] instead of failing.
pub fn resolve_locale(language: &str) -> &'static str {
    let normalized = language.trim().to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, locale)| *locale)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Maps a locale code to the voice used for speech synthesis.
pub fn resolve_voice(locale: &str) -> &'static str {
    match locale {
        "es-ES" => "Sergio",
        "en-GB" => "Emma",
        "de-DE" => "Daniel",
        "ca-ES" => "Arlet",
        "fr-FR" => "Celine",
        _ => DEFAULT_VOICE,
    }
}

/// Returns true when `language` resolves to something other than the fallback.
pub fn is_supported_language(language: &str) -> bool {
    let normalized = language.trim().to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .any(|(name, _)| *name == normalized)
}
