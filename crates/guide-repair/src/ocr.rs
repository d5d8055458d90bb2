//! Normalization of raw OCR text dumps into MyST documents.
//!
//! The OCR pass itself happens outside this tool; these functions take the
//! extracted text and tidy the artifacts it usually leaves behind.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::error::{RepairError, Result};

/// Suffix appended to the source stem for imported documents.
pub const OCR_SUFFIX: &str = "_ocr";

/// `texkg`, `\texs` and friends: a `\text{...}` unit that lost its braces.
static BROKEN_UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\\|\b)tex(mol|kg|cd|m|s|a|k)\b").expect("Invalid unit fragment regex")
});

/// Builds a MyST document from extracted text.
///
/// The title comes from the file stem (`clase_01_vectores` becomes
/// `Clase 01 Vectores`). Line breaks are collapsed to spaces and bare
/// `cdot` / `textm` fragments become `\cdot` / `\text{m}`.
pub fn normalize_ocr_text(title_stem: &str, raw: &str) -> String {
    let mut body = raw.replace("\r\n", " ").replace(['\n', '\r'], " ");
    body = replace_unescaped(&body, "cdot", "\\cdot");
    body = replace_unescaped(&body, "textm", "\\text{m}");
    body = fix_unit_fragments(&body);
    format!("# {}\n\n{body}", title_case(&title_stem.replace('_', " ")))
}

/// Output file name for an imported document.
pub fn ocr_output_file_name(stem: &str) -> String {
    format!("{stem}{OCR_SUFFIX}.myst")
}

/// Reads a text dump and writes the normalized document into `output_dir`.
pub fn import_text_file(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let raw = std::fs::read_to_string(input).map_err(|e| RepairError::io(input, e))?;
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("documento");
    std::fs::create_dir_all(output_dir).map_err(|e| RepairError::io(output_dir, e))?;
    let output = output_dir.join(ocr_output_file_name(stem));
    std::fs::write(&output, normalize_ocr_text(stem, &raw))
        .map_err(|e| RepairError::io(&output, e))?;
    info!(input = %input.display(), output = %output.display(), "text imported");
    Ok(output)
}

/// Restores `\text{unit}` for SI units written as `texkg` or `\texkg`.
pub fn fix_unit_fragments(text: &str) -> String {
    BROKEN_UNIT_REGEX
        .replace_all(text, r"\text{${1}}")
        .into_owned()
}

/// Replaces `word` with `replacement` unless it already follows a backslash.
pub fn replace_unescaped(text: &str, word: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (index, _) in text.match_indices(word) {
        out.push_str(&text[last..index]);
        if text[..index].ends_with('\\') {
            out.push_str(word);
        } else {
            out.push_str(replacement);
        }
        last = index + word.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Uppercases the first letter of every alphabetic run, lowercases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
