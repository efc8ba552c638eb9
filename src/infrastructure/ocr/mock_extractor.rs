use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::LineDelimiter;

/// Extractor that returns scripted text instead of running OCR. Responses
/// are matched by path suffix, which pairs with the pseudo paths the mock
/// masker derives (`...-all`, `...-in`, `...-out`); anything unmatched gets
/// the fallback text, which is what the verification pass sees.
pub struct MockTextExtractor {
    responses: Vec<(String, String)>,
    fallback: String,
}

impl MockTextExtractor {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            responses: Vec::new(),
            fallback: fallback.into(),
        }
    }

    pub fn with_response(mut self, path_suffix: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.push((path_suffix.into(), text.into()));
        self
    }
}

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract(
        &self,
        image: &Path,
        delimiter: LineDelimiter,
    ) -> Result<Vec<String>, TextExtractorError> {
        let path = image.display().to_string();
        let text = self
            .responses
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix))
            .map(|(_, text)| text.as_str())
            .unwrap_or(self.fallback.as_str());

        Ok(delimiter.split(text))
    }
}
