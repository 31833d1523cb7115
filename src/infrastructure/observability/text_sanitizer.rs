const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens user-derived text (transcripts, translations) for log lines and
/// redacts anything that looks like a credential.
pub fn sanitize_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let sanitized = if total > MAX_VISIBLE_CHARS {
        let cut = trimmed
            .char_indices()
            .nth(MAX_VISIBLE_CHARS)
            .map(|(idx, _)| idx)
            .unwrap_or(trimmed.len());
        format!("{}... ({} chars total)", &trimmed[..cut], total)
    } else {
        trimmed.to_string()
    };

    redact_credentials(&sanitized)
}

fn redact_credentials(text: &str) -> String {
    let patterns = [
        ("X-Amz-Signature=", "X-Amz-Signature=[REDACTED]"),
        ("X-Amz-Credential=", "X-Amz-Credential=[REDACTED]"),
        ("X-Amz-Security-Token=", "X-Amz-Security-Token=[REDACTED]"),
        ("aws_secret_access_key=", "aws_secret_access_key=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
