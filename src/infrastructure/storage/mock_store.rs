use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{ImageStore, ImageStoreError};
use crate::domain::{ImageHandle, StoredImage};

/// Store that writes nothing and hands back a fabricated path, for tests
/// whose maskers and extractors never touch the filesystem.
pub struct MockImageStore;

#[async_trait]
impl ImageStore for MockImageStore {
    async fn store(&self, _data: &[u8]) -> Result<StoredImage, ImageStoreError> {
        Ok(StoredImage::new(
            ImageHandle::new(),
            PathBuf::from("mock-upload.png"),
        ))
    }
}
