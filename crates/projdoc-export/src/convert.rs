use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ExportError;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// What gets handed to a converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionInput {
    /// A packaged DOCX document.
    StructuredDocument(Vec<u8>),
    /// Plain text (read as markdown by backends that care).
    RenderableText(String),
}

impl ConversionInput {
    /// Reject content that cannot be what the variant claims to be.
    pub fn validate(&self) -> Result<(), ExportError> {
        match self {
            ConversionInput::StructuredDocument(bytes) if !bytes.starts_with(ZIP_MAGIC) => {
                Err(ExportError::InvalidConversionInput(format!(
                    "structured document is not a DOCX package ({} bytes, missing ZIP header)",
                    bytes.len()
                )))
            }
            ConversionInput::RenderableText(text) if text.trim().is_empty() => Err(
                ExportError::InvalidConversionInput("renderable text is empty".to_string()),
            ),
            _ => Ok(()),
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            ConversionInput::StructuredDocument(_) => "report.docx",
            ConversionInput::RenderableText(_) => "report.txt",
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            ConversionInput::StructuredDocument(bytes) => bytes,
            ConversionInput::RenderableText(text) => text.as_bytes(),
        }
    }
}

/// Renders a report into PDF bytes.
pub trait Converter: Send + Sync {
    fn name(&self) -> &'static str;

    fn convert(&self, input: &ConversionInput) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Pandoc,
    #[serde(rename = "libreoffice")]
    LibreOffice,
}

impl Backend {
    pub fn default_binary(self) -> &'static str {
        match self {
            Backend::Pandoc => "pandoc",
            Backend::LibreOffice => "soffice",
        }
    }
}

/// Which converter to run and where it is installed. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub backend: Backend,
    /// Path to the converter executable; `None` looks it up on `PATH`.
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Pandoc `--pdf-engine`; ignored by other backends.
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: Option<String>,
}

fn default_pdf_engine() -> Option<String> {
    Some("wkhtmltopdf".to_string())
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            binary: None,
            pdf_engine: default_pdf_engine(),
        }
    }
}

impl ConverterConfig {
    pub fn binary(&self) -> PathBuf {
        self.binary
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.backend.default_binary()))
    }
}

pub fn build_converter(config: &ConverterConfig) -> Box<dyn Converter> {
    let binary = config.binary();
    if binary.is_absolute() && !binary.exists() {
        warn!(binary = %binary.display(), "configured converter binary does not exist");
    }
    match config.backend {
        Backend::Pandoc => Box::new(PandocConverter::new(binary, config.pdf_engine.clone())),
        Backend::LibreOffice => Box::new(LibreOfficeConverter::new(binary)),
    }
}

/// `pandoc <input> -o report.pdf --pdf-engine=<engine>`
#[derive(Debug, Clone)]
pub struct PandocConverter {
    binary: PathBuf,
    pdf_engine: Option<String>,
}

impl PandocConverter {
    pub fn new(binary: impl Into<PathBuf>, pdf_engine: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            pdf_engine,
        }
    }
}

impl Converter for PandocConverter {
    fn name(&self) -> &'static str {
        "pandoc"
    }

    fn convert(&self, input: &ConversionInput) -> Result<Vec<u8>, ExportError> {
        input.validate()?;

        let workdir = tempfile::tempdir()?;
        let input_path = stage_input(workdir.path(), input)?;
        let output_path = workdir.path().join("report.pdf");

        let mut cmd = Command::new(&self.binary);
        cmd.arg(&input_path).arg("-o").arg(&output_path);
        if let ConversionInput::RenderableText(_) = input {
            cmd.arg("--from=markdown");
        }
        if let Some(engine) = &self.pdf_engine {
            cmd.arg(format!("--pdf-engine={engine}"));
        }

        run(&self.binary, cmd)?;
        read_output(&output_path)
    }
}

/// `soffice --headless --convert-to pdf --outdir <dir> <input>`
#[derive(Debug, Clone)]
pub struct LibreOfficeConverter {
    binary: PathBuf,
}

impl LibreOfficeConverter {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Converter for LibreOfficeConverter {
    fn name(&self) -> &'static str {
        "libreoffice"
    }

    fn convert(&self, input: &ConversionInput) -> Result<Vec<u8>, ExportError> {
        input.validate()?;

        let workdir = tempfile::tempdir()?;
        let input_path = stage_input(workdir.path(), input)?;

        // A private profile per call; soffice refuses to share one between
        // concurrent processes.
        let profile = workdir.path().join("profile");

        let mut cmd = Command::new(&self.binary);
        cmd.arg(format!("-env:UserInstallation=file://{}", profile.display()))
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(workdir.path())
            .arg(&input_path);

        run(&self.binary, cmd)?;
        read_output(&workdir.path().join("report.pdf"))
    }
}

fn stage_input(dir: &Path, input: &ConversionInput) -> Result<PathBuf, ExportError> {
    let path = dir.join(input.file_name());
    std::fs::write(&path, input.bytes())?;
    Ok(path)
}

fn run(binary: &Path, mut cmd: Command) -> Result<(), ExportError> {
    info!(binary = %binary.display(), "running PDF converter");

    let output = cmd.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => ExportError::ConverterUnavailable {
            binary: binary.display().to_string(),
            reason: e.to_string(),
        },
        _ => ExportError::Io(e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::Conversion(format!(
            "{} exited with {}: {}",
            binary.display(),
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

fn read_output(path: &Path) -> Result<Vec<u8>, ExportError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            ExportError::Conversion("converter finished without writing a PDF".to_string())
        }
        _ => ExportError::Io(e),
    })?;

    if bytes.is_empty() {
        return Err(ExportError::Conversion("converter wrote an empty PDF".to_string()));
    }

    Ok(bytes)
}
