use std::str::FromStr;

use babelcast::domain::MediaFormat;

#[test]
fn given_known_extension_when_mapping_then_returns_format() {
    assert_eq!(MediaFormat::from_extension("webm"), Some(MediaFormat::Webm));
    assert_eq!(MediaFormat::from_extension("MP3"), Some(MediaFormat::Mp3));
    assert_eq!(MediaFormat::from_extension("m4a"), Some(MediaFormat::Mp4));
    assert_eq!(MediaFormat::from_extension("oga"), Some(MediaFormat::Ogg));
}

#[test]
fn given_unknown_extension_when_mapping_then_returns_none() {
    assert_eq!(MediaFormat::from_extension("txt"), None);
    assert_eq!(MediaFormat::from_extension(""), None);
}

#[test]
fn given_default_when_created_then_is_webm() {
    assert_eq!(MediaFormat::default(), MediaFormat::Webm);
    assert_eq!(MediaFormat::default().as_str(), "webm");
}

#[test]
fn given_invalid_string_when_parsing_then_returns_error() {
    assert!(MediaFormat::from_str("wav").is_ok());
    let err = MediaFormat::from_str("aiff").unwrap_err();
    assert!(err.contains("aiff"));
}
