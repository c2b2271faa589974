use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use projdoc_core::models::submission::ProjectSubmission;

use crate::error::ApiError;
use crate::form::ReportForm;
use crate::state::AppState;

pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.pages.form(&ReportForm::default(), None)?;
    Ok(Html(page))
}

/// Generate a report from the HTML form and answer with download links.
///
/// Failures re-render the form with the submitted values and the error.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Result<Response, ApiError> {
    let submission = ProjectSubmission::from(form.clone());

    let result = match submission.require_fields() {
        Ok(()) => super::generate(&state, submission.clone()).await,
        Err(e) => Err(ApiError::from(e)),
    };

    match result {
        Ok(artifacts) => {
            let page = state.pages.result(&submission.project_name, &artifacts)?;
            Ok(Html(page).into_response())
        }
        Err(e @ ApiError::Internal(_)) => Err(e),
        Err(e) => {
            e.log();
            let page = state.pages.form(&form, Some(&e.public_message()))?;
            Ok((e.status(), Html(page)).into_response())
        }
    }
}
