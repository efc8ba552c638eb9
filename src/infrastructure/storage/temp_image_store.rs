use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{ImageStore, ImageStoreError};
use crate::domain::{ImageHandle, StoredImage};

/// Stores uploads under a local temp root with handle-derived names, so no
/// two requests ever touch the same working files. Files are retained after
/// the request; cleanup of the temp root is an external concern.
pub struct TempImageStore {
    root: PathBuf,
}

impl TempImageStore {
    pub fn new(root: PathBuf) -> Result<Self, ImageStoreError> {
        std::fs::create_dir_all(&root).map_err(|e| ImageStoreError::CreateFailed(e.to_string()))?;
        Ok(Self { root })
    }
}

#[async_trait]
impl ImageStore for TempImageStore {
    async fn store(&self, data: &[u8]) -> Result<StoredImage, ImageStoreError> {
        let handle = ImageHandle::new();
        let path = self.root.join(format!("upload-{}", handle));

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| ImageStoreError::CreateFailed(e.to_string()))?;

        file.write_all(data)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(handle = %handle, path = %path.display(), "Upload written");

        Ok(StoredImage::new(handle, path))
    }
}
