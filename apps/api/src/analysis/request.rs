//! Typed boundary for `POST /analyze`: multipart form in, `AnalysisRequest` out.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

pub const RESUME_FILE_FIELD: &str = "resumeFile";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// What the form actually contained, before validation.
#[derive(Debug, Default)]
pub struct RawAnalysisForm {
    pub resume_file: Option<Bytes>,
    pub job_description: Option<String>,
}

/// A validated analysis request. Lives for one request only.
#[derive(Debug)]
pub struct AnalysisRequest {
    /// Never empty.
    pub resume: Bytes,
    pub job_description: String,
}

impl RawAnalysisForm {
    /// Reads the multipart stream.
    ///
    /// `resumeFile` only counts when sent as a file part and `jobDescription`
    /// only as a plain field; the first occurrence of each wins and unknown
    /// fields are skipped.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_upload_bytes: usize,
    ) -> Result<Self, AppError> {
        let mut form = RawAnalysisForm::default();
        let read_err = |e: MultipartError| multipart_error(e, max_upload_bytes);

        while let Some(field) = multipart.next_field().await.map_err(read_err)? {
            let is_file = field.file_name().is_some();
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(RESUME_FILE_FIELD) if is_file && form.resume_file.is_none() => {
                    form.resume_file = Some(field.bytes().await.map_err(read_err)?);
                }
                Some(JOB_DESCRIPTION_FIELD) if !is_file && form.job_description.is_none() => {
                    form.job_description = Some(field.text().await.map_err(read_err)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The single validation step: a usable request or `MissingResumeFile`.
    pub fn validate(self) -> Result<AnalysisRequest, AppError> {
        let resume = self
            .resume_file
            .filter(|bytes| !bytes.is_empty())
            .ok_or(AppError::MissingResumeFile)?;

        Ok(AnalysisRequest {
            resume,
            job_description: self.job_description.unwrap_or_default(),
        })
    }
}

fn multipart_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_upload_bytes)
    } else {
        AppError::Internal(anyhow::anyhow!("Malformed multipart body: {e}"))
    }
}
