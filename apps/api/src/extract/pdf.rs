use super::ExtractError;

/// Extracts text from PDF bytes.
///
/// `pdf_extract` walks the pages in order and concatenates their text,
/// which is exactly the single-pass traversal we want; no separator is
/// added beyond what the page text itself carries.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
}
