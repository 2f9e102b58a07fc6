use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractError;

/// Extracts text from DOCX bytes.
///
/// Walks paragraphs in document order; every paragraph contributes its
/// run text followed by a newline, empty paragraphs included.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(data).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            for pc in para.children.iter() {
                if let ParagraphChild::Run(run) = pc {
                    for rc in run.children.iter() {
                        if let RunChild::Text(t) = rc {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
