use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tera::{Context, Tera};

use projdoc_core::models::catalog::{DEGREES, DEPARTMENTS, DESIGNATIONS, FACULTY_DEPARTMENTS};
use projdoc_export::pipeline::{Artifact, ReportArtifacts};

use crate::form::ReportForm;

const FORM_PAGE: &str = "form.html";
const RESULT_PAGE: &str = "result.html";

/// A downloadable artifact with its bytes base64-encoded.
#[derive(Debug, Clone, Serialize)]
pub struct EncodedArtifact {
    pub filename: String,
    pub content_type: String,
    pub data: String,
}

impl From<&Artifact> for EncodedArtifact {
    fn from(artifact: &Artifact) -> Self {
        Self {
            filename: artifact.filename.to_string(),
            content_type: artifact.content_type.to_string(),
            data: STANDARD.encode(&artifact.bytes),
        }
    }
}

/// HTML pages of the intake form, compiled once at startup.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (FORM_PAGE, include_str!("../templates/form.html")),
            (RESULT_PAGE, include_str!("../templates/result.html")),
        ])?;
        Ok(Self { tera })
    }

    /// The intake form, prefilled with `values` and showing `error` if set.
    pub fn form(&self, values: &ReportForm, error: Option<&str>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("form", values);
        context.insert("error", &error);
        context.insert("degrees", DEGREES);
        context.insert("departments", DEPARTMENTS);
        context.insert("designations", DESIGNATIONS);
        context.insert("faculty_departments", FACULTY_DEPARTMENTS);
        self.tera.render(FORM_PAGE, &context)
    }

    /// Download page for a generated report.
    pub fn result(&self, project_name: &str, artifacts: &ReportArtifacts) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("project_name", project_name);
        context.insert("docx", &EncodedArtifact::from(&artifacts.docx));
        context.insert("pdf", &EncodedArtifact::from(&artifacts.pdf));
        self.tera.render(RESULT_PAGE, &context)
    }
}
