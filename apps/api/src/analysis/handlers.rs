//! Axum route handler for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::analysis::request::RawAnalysisForm;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Multipart form: `resumeFile` (PDF, required) and `jobDescription` (text, optional).
/// Extracts the resume text, scores keyword overlap against the job description,
/// and returns the analysis report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        // Not a multipart request at all: there are no files in it.
        let multipart = multipart.map_err(|rejection| {
            debug!("Multipart extraction rejected: {rejection}");
            AppError::MissingResumeFile
        })?;

        let request = RawAnalysisForm::from_multipart(multipart, state.config.max_upload_bytes)
            .await?
            .validate()?;
        let upload_bytes = request.resume.len();

        let resume_text = state.extractor.extract_text(request.resume).await?;
        let result = state
            .analyzer
            .analyze(&request.job_description, &resume_text);

        info!(
            upload_bytes,
            resume_chars = resume_text.chars().count(),
            overall_score = result.overall_score,
            matching = result.keywords.matching.len(),
            "Resume analyzed"
        );
        Ok::<_, AppError>(Json(result))
    }
    .instrument(info_span!("analyze", %request_id))
    .await
}
