//! Document text extraction.
//!
//! One upload in, one plain-text string out. The format set is closed:
//! a declared extension outside {pdf, docx, txt} is rejected before any
//! bytes are parsed.

use thiserror::Error;

pub mod docx;
pub mod pdf;
pub mod txt;

/// The closed set of supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Please upload PDF, DOCX, or TXT.")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

impl DocumentFormat {
    /// Maps a filename to a format by its final dot-separated segment,
    /// case-insensitively. A name without a dot is treated as being all
    /// extension.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = filename
            .rsplit('.')
            .next()
            .unwrap_or(filename)
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            _ => Err(ExtractError::UnsupportedFormat(ext)),
        }
    }
}

/// Extracts the plain-text content of an uploaded document.
///
/// Reads the whole byte slice in one pass; nothing is persisted.
pub fn extract(data: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_text(data),
        DocumentFormat::Docx => docx::extract_text(data),
        DocumentFormat::Txt => Ok(txt::extract_text(data)),
    }
}
