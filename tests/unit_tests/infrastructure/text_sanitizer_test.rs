use babelcast::infrastructure::observability::sanitize_text;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_text(""), "[EMPTY]");
    assert_eq!(sanitize_text("  \n "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_text("  hola mundo "), "hola mundo");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_length() {
    let text = "a".repeat(150);
    let result = sanitize_text(&text);
    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_cuts_on_char_boundary() {
    let text = "é".repeat(120);
    let result = sanitize_text(&text);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_presigned_url_when_sanitizing_then_redacts_signature() {
    let text = "https://b.s3.amazonaws.com/k?X-Amz-Credential=AKIA123&X-Amz-Signature=deadbeef";
    let result = sanitize_text(text);
    assert!(result.contains("X-Amz-Signature=[REDACTED]"));
    assert!(result.contains("X-Amz-Credential=[REDACTED]"));
    assert!(!result.contains("deadbeef"));
    assert!(!result.contains("AKIA123"));
}
