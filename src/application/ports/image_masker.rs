use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::MaskJob;

/// Produces a filtered variant of a stored image that emphasizes one
/// speaker's bubbles. Returns the path of the variant it wrote.
#[async_trait]
pub trait ImageMasker: Send + Sync {
    async fn mask(&self, source: &Path, job: MaskJob) -> Result<PathBuf, ImageMaskerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageMaskerError {
    #[error("invocation failed: {0}")]
    InvocationFailed(String),
    #[error("converter exited with {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },
    #[error("conversion timed out after {0}s")]
    TimedOut(u64),
}
