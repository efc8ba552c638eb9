use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{ImageMasker, TextExtractor};
use crate::application::services::ScanError;
use crate::domain::TranscriptLine;
use crate::presentation::state::AppState;

/// Wire shape of every `/scan` reply. The request always answers HTTP 200;
/// failure is carried in-body so clients branch on `Error` alone.
#[derive(Serialize)]
pub struct ScanResponse {
    #[serde(rename = "Error")]
    pub error: bool,
    #[serde(rename = "ErrorMsg")]
    pub error_msg: String,
    #[serde(rename = "TmpFile")]
    pub tmp_file: String,
    #[serde(rename = "Lines")]
    pub lines: Option<Vec<ScanLine>>,
}

#[derive(Serialize)]
pub struct ScanLine {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ScanResponse {
    fn success(tmp_file: String, transcript: Vec<TranscriptLine>) -> Self {
        let lines = transcript
            .into_iter()
            .map(|line| ScanLine {
                kind: line.speaker.as_str().to_string(),
                text: line.text,
            })
            .collect();

        Self {
            error: false,
            error_msg: String::new(),
            tmp_file,
            lines: Some(lines),
        }
    }

    fn failure(error: &ScanError) -> Self {
        Self {
            error: true,
            error_msg: error.user_message(),
            tmp_file: String::new(),
            lines: None,
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn scan_handler<M, E>(
    State(state): State<AppState<M, E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    M: ImageMasker + 'static,
    E: TextExtractor + 'static,
{
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::warn!(error = %e, "Scan request without usable upload");
            return Json(ScanResponse::failure(&e));
        }
    };

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Processing scan upload"
    );

    match state.scan_service.scan(&upload.data).await {
        Ok(transcript) => Json(ScanResponse::success(upload.filename, transcript)),
        Err(e) => {
            tracing::warn!(error = %e, "Scan failed");
            Json(ScanResponse::failure(&e))
        }
    }
}

struct Upload {
    filename: String,
    data: Bytes,
}

// A request that is not even multipart gets the same in-body error as one
// with the form field missing; the status stays 200 either way.
async fn read_upload(multipart: Result<Multipart, MultipartRejection>) -> Result<Upload, ScanError> {
    let mut multipart = multipart.map_err(|_| ScanError::MissingUpload)?;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let data = field.bytes().await.map_err(|_| ScanError::MissingUpload)?;

        return Ok(Upload { filename, data });
    }

    Err(ScanError::MissingUpload)
}
