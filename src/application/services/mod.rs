mod scan_service;
mod screenshot_verifier;
mod transcript_merger;

pub use scan_service::{ScanError, ScanService};
pub use screenshot_verifier::ScreenshotVerifier;
pub use transcript_merger::merge_transcript;
