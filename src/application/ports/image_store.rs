use async_trait::async_trait;

use crate::domain::StoredImage;

/// Persists an uploaded image to request-scoped temporary storage so the
/// masking and extraction tools can read it.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, data: &[u8]) -> Result<StoredImage, ImageStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("create failed: {0}")]
    CreateFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
}
