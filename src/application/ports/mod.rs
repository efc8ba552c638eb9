mod image_masker;
mod image_store;
mod text_extractor;

pub use image_masker::{ImageMasker, ImageMaskerError};
pub use image_store::{ImageStore, ImageStoreError};
pub use text_extractor::{TextExtractor, TextExtractorError};
