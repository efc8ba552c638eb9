use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use chatscan::application::ports::{ImageMasker, ImageMaskerError, ImageStore};
use chatscan::application::services::{ScanError, ScanService, ScreenshotVerifier};
use chatscan::domain::{MaskJob, Speaker};
use chatscan::infrastructure::imaging::MockImageMasker;
use chatscan::infrastructure::ocr::MockTextExtractor;
use chatscan::infrastructure::storage::{MockImageStore, TempImageStore};

const SEND_MARKER: &str = "Send";

fn scripted_extractor() -> MockTextExtractor {
    MockTextExtractor::new("Hey\n\nHow are you\n\nGood, thanks\n\nSend")
        .with_response("-all", "Hey\nHow are you\nGood, thanks")
        .with_response("-in", "How are you")
        .with_response("-out", "Hey\nGood, thanks")
}

fn create_service(
    extractor: MockTextExtractor,
) -> (Arc<MockImageMasker>, ScanService<MockImageMasker, MockTextExtractor>) {
    let masker = Arc::new(MockImageMasker::new());
    let service = ScanService::new(
        Arc::clone(&masker),
        Arc::new(extractor),
        Arc::new(MockImageStore),
        SEND_MARKER.to_string(),
    );
    (masker, service)
}

#[tokio::test]
async fn given_message_screenshot_when_scanning_then_transcript_is_tagged_and_ordered() {
    let (_masker, service) = create_service(scripted_extractor());

    let transcript = service.scan(b"fake image bytes").await.unwrap();

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].text, "Hey");
    assert_eq!(transcript[0].speaker, Speaker::Outgoing);
    assert_eq!(transcript[1].text, "How are you");
    assert_eq!(transcript[1].speaker, Speaker::Incoming);
    assert_eq!(transcript[2].text, "Good, thanks");
    assert_eq!(transcript[2].speaker, Speaker::Outgoing);
}

#[tokio::test]
async fn given_all_three_jobs_when_scanning_then_masker_runs_once_per_job() {
    let (masker, service) = create_service(scripted_extractor());

    service.scan(b"fake image bytes").await.unwrap();

    assert_eq!(masker.call_count(), 3);
}

#[tokio::test]
async fn given_upload_without_marker_when_scanning_then_rejected_before_any_masking() {
    let (masker, service) = create_service(MockTextExtractor::new("Hello\n\nworld"));

    let result = service.scan(b"not a screenshot").await;

    assert!(matches!(result, Err(ScanError::NotAScreenshot)));
    assert_eq!(masker.call_count(), 0);
}

#[tokio::test]
async fn given_failing_converter_when_scanning_then_request_fails_with_masking_error() {
    struct FailingMasker;

    #[async_trait]
    impl ImageMasker for FailingMasker {
        async fn mask(&self, _source: &Path, _job: MaskJob) -> Result<PathBuf, ImageMaskerError> {
            Err(ImageMaskerError::CommandFailed {
                status: 1,
                stderr: "convert: unable to open image".to_string(),
            })
        }
    }

    let service = ScanService::new(
        Arc::new(FailingMasker),
        Arc::new(scripted_extractor()),
        Arc::new(MockImageStore),
        SEND_MARKER.to_string(),
    );

    let result = service.scan(b"fake image bytes").await;

    match result {
        Err(ScanError::Masking { job, .. }) => assert_eq!(job, MaskJob::Full),
        other => panic!("expected masking error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_marker_followed_by_whitespace_when_verifying_then_accepted() {
    let verifier = ScreenshotVerifier::new(
        Arc::new(MockTextExtractor::new("Hello\n\nworld\n\nSend\n\n")),
        SEND_MARKER.to_string(),
    );

    let verified = verifier.verify(Path::new("img.png")).await.unwrap();

    assert!(verified);
}

#[tokio::test]
async fn given_text_without_trailing_marker_when_verifying_then_rejected() {
    let verifier = ScreenshotVerifier::new(
        Arc::new(MockTextExtractor::new("Send me the file\n\nHello world")),
        SEND_MARKER.to_string(),
    );

    let verified = verifier.verify(Path::new("img.png")).await.unwrap();

    assert!(!verified);
}

#[tokio::test]
async fn given_upload_bytes_when_storing_then_file_persisted_under_handle_name() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = TempImageStore::new(dir.path().to_path_buf()).unwrap();

    let stored = store.store(b"image bytes").await.unwrap();

    let written = std::fs::read(stored.path()).unwrap();
    assert_eq!(written, b"image bytes");
    let name = stored.path().file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("upload-"), "unexpected name: {}", name);
}

#[tokio::test]
async fn given_two_uploads_when_storing_then_working_files_never_collide() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = TempImageStore::new(dir.path().to_path_buf()).unwrap();

    let first = store.store(b"first").await.unwrap();
    let second = store.store(b"second").await.unwrap();

    assert_ne!(first.path(), second.path());
    assert_ne!(first.handle, second.handle);
}
