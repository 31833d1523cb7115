use async_trait::async_trait;
use aws_sdk_translate::operation::translate_text::TranslateTextError;

use crate::application::ports::{TextTranslator, TranslationError};
use crate::infrastructure::observability::sanitize_text;

/// Regional variants Amazon Translate accepts as-is. Every other locale is
/// reduced to its language subtag.
const REGIONAL_CODES: &[&str] = &["es-MX", "fr-CA", "pt-PT", "zh-TW"];

pub struct AwsTranslator {
    client: aws_sdk_translate::Client,
}

impl AwsTranslator {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_translate::Client::new(config),
        }
    }
}

fn language_code(locale: &str) -> String {
    if let Some(code) = REGIONAL_CODES
        .iter()
        .find(|code| code.eq_ignore_ascii_case(locale))
    {
        return (*code).to_string();
    }

    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

#[async_trait]
impl TextTranslator for AwsTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslationError> {
        let source = language_code(source_locale);
        let target = language_code(target_locale);

        tracing::debug!(
            source = %source,
            target = %target,
            text = %sanitize_text(text),
            "Calling Amazon Translate"
        );

        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(&source)
            .target_language_code(&target)
            .send()
            .await
            .map_err(|e| match e.into_service_error() {
                TranslateTextError::UnsupportedLanguagePairException(_) => {
                    TranslationError::UnsupportedLanguagePair {
                        source_locale: source_locale.to_string(),
                        target_locale: target_locale.to_string(),
                    }
                }
                other => TranslationError::RequestFailed(other.to_string()),
            })?;

        Ok(output.translated_text().to_string())
    }
}
