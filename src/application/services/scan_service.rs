use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    ImageMasker, ImageMaskerError, ImageStore, ImageStoreError, TextExtractor, TextExtractorError,
};
use crate::application::services::{ScreenshotVerifier, merge_transcript};
use crate::domain::{LineDelimiter, MaskJob, TranscriptLine};

pub struct ScanService<M, E>
where
    M: ImageMasker,
    E: TextExtractor,
{
    masker: Arc<M>,
    extractor: Arc<E>,
    image_store: Arc<dyn ImageStore>,
    verifier: ScreenshotVerifier<E>,
}

impl<M, E> ScanService<M, E>
where
    M: ImageMasker,
    E: TextExtractor,
{
    pub fn new(
        masker: Arc<M>,
        extractor: Arc<E>,
        image_store: Arc<dyn ImageStore>,
        verification_marker: String,
    ) -> Self {
        let verifier = ScreenshotVerifier::new(Arc::clone(&extractor), verification_marker);
        Self {
            masker,
            extractor,
            image_store,
            verifier,
        }
    }

    /// Runs one upload through the whole pipeline: store, verify, the three
    /// mask+extract passes, merge. Any stage failure fails the request as a
    /// whole; a partial transcript is never produced.
    pub async fn scan(&self, data: &[u8]) -> Result<Vec<TranscriptLine>, ScanError> {
        let stored = self.image_store.store(data).await?;

        tracing::debug!(handle = %stored.handle, bytes = data.len(), "Upload stored");

        if !self.verifier.verify(stored.path()).await? {
            tracing::info!(handle = %stored.handle, "Upload rejected by screenshot verifier");
            return Err(ScanError::NotAScreenshot);
        }

        // The three pipelines depend only on the stored source and run
        // concurrently, each reporting through its own future. All three
        // are joined before any error handling; no outcome is dropped
        // mid-flight and no pipeline ever touches the response.
        let (all, incoming, outgoing) = tokio::join!(
            self.run_pipeline(stored.path(), MaskJob::Full),
            self.run_pipeline(stored.path(), MaskJob::Incoming),
            self.run_pipeline(stored.path(), MaskJob::Outgoing),
        );
        let (all, incoming, outgoing) = (all?, incoming?, outgoing?);

        let transcript = merge_transcript(&all, &incoming, &outgoing);

        tracing::info!(
            handle = %stored.handle,
            lines = transcript.len(),
            "Scan completed"
        );

        Ok(transcript)
    }

    async fn run_pipeline(
        &self,
        source: &Path,
        job: MaskJob,
    ) -> Result<Vec<String>, ScanError> {
        let masked = self
            .masker
            .mask(source, job)
            .await
            .map_err(|source| ScanError::Masking { job, source })?;

        let lines = self.extractor.extract(&masked, LineDelimiter::Line).await?;

        tracing::debug!(job = %job, lines = lines.len(), "Pipeline extraction finished");

        Ok(lines)
    }
}

/// Request-scoped failure taxonomy. Every variant is recoverable and maps
/// onto one stable, user-visible message.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("missing file upload")]
    MissingUpload,
    #[error("storage: {0}")]
    Storage(#[from] ImageStoreError),
    #[error("not a text message screenshot")]
    NotAScreenshot,
    #[error("image optimization failed ({job}): {source}")]
    Masking {
        job: MaskJob,
        source: ImageMaskerError,
    },
    #[error("text extraction: {0}")]
    Extraction(#[from] TextExtractorError),
}

impl ScanError {
    /// The wire-level error message. These strings are a stable contract
    /// with existing clients; change them only alongside the API version.
    pub fn user_message(&self) -> String {
        match self {
            ScanError::MissingUpload => "Missing file upload.".to_string(),
            ScanError::Storage(ImageStoreError::CreateFailed(_)) => {
                "Can't create temp file.".to_string()
            }
            ScanError::Storage(ImageStoreError::WriteFailed(_)) => {
                "Can't copy to temp file.".to_string()
            }
            ScanError::NotAScreenshot => "Not a text message screenshot.".to_string(),
            ScanError::Masking { job, .. } => {
                format!("Image optimization failed ({}).", job)
            }
            ScanError::Extraction(_) => "Text extraction failed.".to_string(),
        }
    }
}
