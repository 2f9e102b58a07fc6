//! Resume text normalization.
//!
//! A fixed, order-sensitive chain of substitutions applied to every
//! document before vectorization. The shipped artifacts were fitted
//! against exactly this chain, so the patterns and their order must not
//! change.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+\s").unwrap());
static RT_CC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"RT|cc").unwrap());
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\S+\s").unwrap());
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\S+").unwrap());
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##).unwrap());
static NON_ASCII_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\x7f]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleans raw resume text into the form the vectorizer was fitted on.
///
/// Each substitution runs on the previous step's output; later patterns
/// can match text exposed by earlier replacements. Total function,
/// never fails.
pub fn clean(text: &str) -> String {
    let text = URL_RE.replace_all(text, " ");
    let text = RT_CC_RE.replace_all(&text, " ");
    let text = HASHTAG_RE.replace_all(&text, " ");
    let text = MENTION_RE.replace_all(&text, " ");
    let text = PUNCT_RE.replace_all(&text, " ");
    let text = NON_ASCII_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
