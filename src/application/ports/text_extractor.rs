use std::path::Path;

use async_trait::async_trait;

use crate::domain::LineDelimiter;

/// Runs character recognition against an image and returns the text it
/// found, segmented into an ordered line sequence on the given delimiter.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        image: &Path,
        delimiter: LineDelimiter,
    ) -> Result<Vec<String>, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("invocation failed: {0}")]
    InvocationFailed(String),
    #[error("extraction timed out after {0}s")]
    TimedOut(u64),
    #[error("output artifact unreadable: {0}")]
    ArtifactUnreadable(String),
}
