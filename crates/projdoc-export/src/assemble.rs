use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use projdoc_core::models::field_set::FieldSet;
use projdoc_core::models::submission::ProjectType;

use crate::document::{DocxPackage, TemplateDocument};
use crate::error::ExportError;
use crate::styles::StyleDirective;
use crate::substitute::substitute;

/// A template file and the style rules that go with it.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    pub path: PathBuf,
    pub style: StyleDirective,
}

/// The two report templates, one per project type.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub internal: TemplateSource,
    pub external: TemplateSource,
}

impl TemplateSet {
    /// Templates under `dir` with their standard file names and the
    /// reference style directive.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let source = |project_type: ProjectType| TemplateSource {
            path: dir.join(project_type.template_file_name()),
            style: StyleDirective::reference(),
        };
        Self {
            internal: source(ProjectType::Internal),
            external: source(ProjectType::External),
        }
    }

    pub fn source(&self, project_type: ProjectType) -> &TemplateSource {
        match project_type {
            ProjectType::Internal => &self.internal,
            ProjectType::External => &self.external,
        }
    }

    /// Apply the same style directive to both templates.
    pub fn with_style(mut self, style: StyleDirective) -> Self {
        self.internal.style = style.clone();
        self.external.style = style;
        self
    }
}

/// A filled report: the substituted body and the packaged DOCX bytes.
#[derive(Debug, Clone)]
pub struct AssembledReport {
    pub document: TemplateDocument,
    pub docx: Vec<u8>,
}

/// Load the template for `project_type`, fill it with `fields` and package it.
pub fn assemble(
    templates: &TemplateSet,
    project_type: ProjectType,
    fields: &FieldSet,
) -> Result<AssembledReport, ExportError> {
    let source = templates.source(project_type);
    let bytes = read_template(&source.path)?;

    info!(
        template = %source.path.display(),
        project_type = project_type.label(),
        fields = fields.len(),
        "assembling report"
    );

    let package = DocxPackage::read(&bytes)?;
    let document = substitute(&package.body(), fields, &source.style);
    let docx = package.write(&document)?;

    Ok(AssembledReport { document, docx })
}

fn read_template(path: &Path) -> Result<Vec<u8>, ExportError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExportError::TemplateNotFound(path.to_path_buf()),
        _ => ExportError::TemplateUnreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
