use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("template unreadable: {}: {source}", .path.display())]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DOCX processing failed: {0}")]
    Docx(String),

    #[error("invalid conversion input: {0}")]
    InvalidConversionInput(String),

    #[error("converter `{binary}` is not available: {reason}")]
    ConverterUnavailable { binary: String, reason: String },

    #[error("PDF conversion failed: {0}")]
    Conversion(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<docx_rs::ReaderError> for ExportError {
    fn from(e: docx_rs::ReaderError) -> Self {
        ExportError::Docx(e.to_string())
    }
}
