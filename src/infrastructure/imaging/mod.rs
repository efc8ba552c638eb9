mod magick_masker;
mod mask_profile;
mod mock_masker;

pub use magick_masker::MagickMasker;
pub use mask_profile::{CropMargins, FillColor, MaskProfile, MaskProfiles};
pub use mock_masker::MockImageMasker;
