/// Decodes plain-text bytes as UTF-8, falling back to Latin-1.
///
/// UTF-8 is always attempted first. Latin-1 maps every byte straight to
/// the code point of the same value, so the fallback is total and this
/// function cannot fail.
pub fn extract_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(s) => s.to_string(),
        Err(_) => data.iter().map(|&b| b as char).collect(),
    }
}
