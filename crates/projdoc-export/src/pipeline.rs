use serde::{Deserialize, Serialize};
use tracing::info;

use projdoc_core::models::submission::ProjectSubmission;

use crate::assemble::{TemplateSet, assemble};
use crate::convert::{ConversionInput, Converter};
use crate::error::ExportError;

pub const DOCX_FILENAME: &str = "Project_Report.docx";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PDF_FILENAME: &str = "Project_Report.pdf";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// What the converter is fed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// The filled DOCX package.
    #[default]
    Document,
    /// The filled document flattened to plain text.
    Text,
}

/// A downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub docx: Artifact,
    pub pdf: Artifact,
}

/// Submission in, DOCX and PDF out.
///
/// Holds no per-request state; one instance serves every submission.
pub struct ReportPipeline {
    templates: TemplateSet,
    converter: Box<dyn Converter>,
    input_mode: InputMode,
}

impl ReportPipeline {
    pub fn new(templates: TemplateSet, converter: Box<dyn Converter>, input_mode: InputMode) -> Self {
        Self {
            templates,
            converter,
            input_mode,
        }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn converter_name(&self) -> &'static str {
        self.converter.name()
    }

    /// Run the whole pipeline. Any failure fails the submission; nothing
    /// partial is returned.
    pub fn generate(&self, submission: &ProjectSubmission) -> Result<ReportArtifacts, ExportError> {
        let fields = submission.to_field_set();
        let report = assemble(&self.templates, submission.project_type, &fields)?;

        let input = match self.input_mode {
            InputMode::Document => ConversionInput::StructuredDocument(report.docx.clone()),
            InputMode::Text => ConversionInput::RenderableText(report.document.plain_text()),
        };
        let pdf = self.converter.convert(&input)?;

        info!(
            converter = self.converter.name(),
            docx_bytes = report.docx.len(),
            pdf_bytes = pdf.len(),
            "report generated"
        );

        Ok(ReportArtifacts {
            docx: Artifact {
                filename: DOCX_FILENAME,
                content_type: DOCX_CONTENT_TYPE,
                bytes: report.docx,
            },
            pdf: Artifact {
                filename: PDF_FILENAME,
                content_type: PDF_CONTENT_TYPE,
                bytes: pdf,
            },
        })
    }
}
