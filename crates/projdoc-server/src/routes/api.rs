use axum::Json;
use axum::extract::State;
use serde::Serialize;

use projdoc_core::models::submission::ProjectSubmission;

use crate::error::ApiError;
use crate::pages::EncodedArtifact;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub project_name: String,
    pub docx: EncodedArtifact,
    pub pdf: EncodedArtifact,
}

/// Generate both artifacts for a JSON submission.
pub async fn create_report(
    State(state): State<AppState>,
    Json(submission): Json<ProjectSubmission>,
) -> Result<Json<ReportResponse>, ApiError> {
    submission.require_fields()?;

    let project_name = submission.project_name.clone();
    let artifacts = super::generate(&state, submission).await?;

    Ok(Json(ReportResponse {
        project_name,
        docx: EncodedArtifact::from(&artifacts.docx),
        pdf: EncodedArtifact::from(&artifacts.pdf),
    }))
}
