mod extraction;
mod speaker;
mod stored_image;
mod transcript;

pub use extraction::{LineDelimiter, MaskJob};
pub use speaker::Speaker;
pub use stored_image::{ImageHandle, StoredImage};
pub use transcript::TranscriptLine;
