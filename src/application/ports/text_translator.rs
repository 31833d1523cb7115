use async_trait::async_trait;

#[async_trait]
pub trait TextTranslator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    RequestFailed(String),
    #[error("unsupported language pair: {source_locale} -> {target_locale}")]
    UnsupportedLanguagePair {
        source_locale: String,
        target_locale: String,
    },
}
