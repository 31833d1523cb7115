use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{TextTranslator, TranslationError};

/// Dictionary translator. Unknown texts come back as `"[{target}] {text}"`.
#[derive(Default)]
pub struct MockTranslator {
    dictionary: HashMap<String, String>,
    fail_with: Option<String>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, text: impl Into<String>, translated: impl Into<String>) -> Self {
        self.dictionary.insert(text.into(), translated.into());
        self
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// `(text, source_locale, target_locale)` of each call, in order.
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslationError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((
                text.to_string(),
                source_locale.to_string(),
                target_locale.to_string(),
            ));
        }

        if let Some(message) = &self.fail_with {
            return Err(TranslationError::RequestFailed(message.clone()));
        }

        Ok(self
            .dictionary
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("[{target_locale}] {text}")))
    }
}
