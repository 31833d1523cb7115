use babelcast::domain::language::{SUPPORTED_LANGUAGES, is_supported_language};
use babelcast::domain::{DEFAULT_LOCALE, DEFAULT_VOICE, resolve_locale, resolve_voice};

#[test]
fn given_known_language_names_when_resolving_then_returns_mapped_locales() {
    assert_eq!(resolve_locale("spanish"), "es-ES");
    assert_eq!(resolve_locale("catalan"), "ca-ES");
    assert_eq!(resolve_locale("german"), "de-DE");
    assert_eq!(resolve_locale("english"), "en-GB");
    assert_eq!(resolve_locale("french"), "fr-FR");
}

#[test]
fn given_mixed_case_and_padding_when_resolving_then_matches_anyway() {
    assert_eq!(resolve_locale("  Spanish "), "es-ES");
    assert_eq!(resolve_locale("FRENCH"), "fr-FR");
}

#[test]
fn given_unknown_language_when_resolving_then_falls_back_to_default_locale() {
    assert_eq!(resolve_locale("klingon"), DEFAULT_LOCALE);
    assert_eq!(resolve_locale(""), "en-US");
    assert!(!is_supported_language("klingon"));
}

#[test]
fn given_mapped_locales_when_resolving_voice_then_returns_dedicated_voice() {
    assert_eq!(resolve_voice("es-ES"), "Sergio");
    assert_eq!(resolve_voice("en-GB"), "Emma");
    assert_eq!(resolve_voice("de-DE"), "Daniel");
    assert_eq!(resolve_voice("ca-ES"), "Arlet");
    assert_eq!(resolve_voice("fr-FR"), "Celine");
}

#[test]
fn given_unmapped_locale_when_resolving_voice_then_returns_default_voice() {
    assert_eq!(resolve_voice("en-US"), DEFAULT_VOICE);
    assert_eq!(resolve_voice("ja-JP"), "Joanna");
}

#[test]
fn given_every_supported_language_when_chaining_lookups_then_voice_is_not_default() {
    for (name, _) in SUPPORTED_LANGUAGES {
        assert!(is_supported_language(name));
        assert_ne!(resolve_voice(resolve_locale(name)), DEFAULT_VOICE, "{name}");
    }
}
