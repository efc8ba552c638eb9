use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ImageMasker, ImageMaskerError};
use crate::domain::MaskJob;

/// Masker that performs no image work: it derives a job-tagged pseudo path
/// and counts invocations, so tests can script a paired extractor per job
/// and assert whether the pipelines ran at all.
#[derive(Default)]
pub struct MockImageMasker {
    calls: AtomicUsize,
}

impl MockImageMasker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageMasker for MockImageMasker {
    async fn mask(&self, source: &Path, job: MaskJob) -> Result<PathBuf, ImageMaskerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PathBuf::from(format!("{}-{}", source.display(), job)))
    }
}
