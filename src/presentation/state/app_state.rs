use std::sync::Arc;

use crate::application::ports::{ImageMasker, TextExtractor};
use crate::application::services::ScanService;

pub struct AppState<M, E>
where
    M: ImageMasker,
    E: TextExtractor,
{
    pub scan_service: Arc<ScanService<M, E>>,
}

impl<M, E> Clone for AppState<M, E>
where
    M: ImageMasker,
    E: TextExtractor,
{
    fn clone(&self) -> Self {
        Self {
            scan_service: Arc::clone(&self.scan_service),
        }
    }
}
