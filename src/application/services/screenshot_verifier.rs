use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::LineDelimiter;

/// Heuristic gate that rejects uploads which are not message screenshots.
///
/// Messaging apps render a send affordance as the last recognizable
/// on-screen text, so a full-image extraction of a genuine screenshot ends
/// with the marker (`"Send"` for the default theme). The marker is
/// configuration, not behavior: other skins and locales swap it out.
pub struct ScreenshotVerifier<E>
where
    E: TextExtractor,
{
    extractor: Arc<E>,
    marker: String,
}

impl<E> ScreenshotVerifier<E>
where
    E: TextExtractor,
{
    pub fn new(extractor: Arc<E>, marker: String) -> Self {
        Self { extractor, marker }
    }

    /// Runs a full-image extraction pass and checks the trimmed text ends
    /// with the marker. An unreadable extraction artifact is an error, not
    /// a rejection.
    pub async fn verify(&self, image: &Path) -> Result<bool, TextExtractorError> {
        let paragraphs = self
            .extractor
            .extract(image, LineDelimiter::Paragraph)
            .await?;

        let text = paragraphs.join("\n\n");
        Ok(text.trim().ends_with(&self.marker))
    }
}
