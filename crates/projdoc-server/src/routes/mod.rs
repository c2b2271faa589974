pub mod api;
pub mod health;
pub mod pages;

use projdoc_core::models::submission::ProjectSubmission;
use projdoc_export::pipeline::ReportArtifacts;

use crate::error::ApiError;
use crate::state::AppState;

/// Run the report pipeline off the async executor.
async fn generate(
    state: &AppState,
    submission: ProjectSubmission,
) -> Result<ReportArtifacts, ApiError> {
    let pipeline = state.pipeline.clone();
    let artifacts = tokio::task::spawn_blocking(move || pipeline.generate(&submission)).await??;
    Ok(artifacts)
}
