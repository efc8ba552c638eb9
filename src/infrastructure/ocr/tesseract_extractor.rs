use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::LineDelimiter;
use crate::infrastructure::process::{CommandError, run_bounded};

/// Tesseract-backed extractor. The binary is pointed at the image with a
/// sibling output base; tesseract appends `.txt` to it.
pub struct TesseractExtractor {
    tesseract_bin: PathBuf,
    timeout: Duration,
}

impl TesseractExtractor {
    pub fn new(tesseract_bin: PathBuf, timeout: Duration) -> Self {
        Self {
            tesseract_bin,
            timeout,
        }
    }
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    async fn extract(
        &self,
        image: &Path,
        delimiter: LineDelimiter,
    ) -> Result<Vec<String>, TextExtractorError> {
        let out_base = format!("{}.ocr", image.display());

        let mut cmd = Command::new(&self.tesseract_bin);
        cmd.arg(image).arg(&out_base);

        match run_bounded(&mut cmd, self.timeout).await {
            // Tesseract's exit status is not authoritative: it reports
            // non-zero for recoverable warnings. The artifact decides.
            Ok(output) if !output.status.success() => {
                tracing::warn!(
                    status = output.status.code().unwrap_or(-1),
                    image = %image.display(),
                    "OCR exited non-zero, falling back to artifact"
                );
            }
            Ok(_) => {}
            Err(CommandError::Spawn(e)) => {
                return Err(TextExtractorError::InvocationFailed(e.to_string()));
            }
            Err(CommandError::TimedOut(secs)) => {
                return Err(TextExtractorError::TimedOut(secs));
            }
        }

        let artifact = PathBuf::from(format!("{}.txt", out_base));
        let text = tokio::fs::read_to_string(&artifact).await.map_err(|e| {
            TextExtractorError::ArtifactUnreadable(format!("{}: {}", artifact.display(), e))
        })?;

        Ok(delimiter.split(&text))
    }
}
