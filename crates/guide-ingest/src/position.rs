//! Translating parser positions into character offsets.
//!
//! `serde_json` reports 1-based lines and byte-based columns. Authors fix
//! broken chapters in a text editor, so diagnostics are given as character
//! offsets and character columns instead.

use serde::Serialize;

/// Location of a problem inside a chapter's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextPosition {
    /// Character offset from the start of the text.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column.
    pub column: usize,
}

impl TextPosition {
    /// Position of the character starting at `byte` (clamped to the text).
    pub fn from_byte_offset(text: &str, byte: usize) -> Self {
        let byte = floor_char_boundary(text, byte.min(text.len()));
        let before = &text[..byte];
        let line_start = before.rfind('\n').map_or(0, |index| index + 1);
        Self {
            offset: before.chars().count(),
            line: before.matches('\n').count() + 1,
            column: text[line_start..byte].chars().count() + 1,
        }
    }
}

/// Byte offset where the 1-based `line` starts.
fn line_start_byte(text: &str, line: usize) -> usize {
    if line <= 1 {
        return 0;
    }
    text.match_indices('\n')
        .nth(line - 2)
        .map_or(text.len(), |(index, _)| index + 1)
}

fn floor_char_boundary(text: &str, mut byte: usize) -> usize {
    while byte > 0 && !text.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

/// Locates a JSON parse error and returns it with the bare error message.
pub fn json_error_position(text: &str, error: &serde_json::Error) -> (TextPosition, String) {
    let line = error.line();
    let column = error.column();
    // A column of 0 means the parser stopped right after a newline.
    let mut byte = (line_start_byte(text, line) + column).saturating_sub(1);

    let full = error.to_string();
    let suffix = format!(" at line {line} column {column}");
    let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();

    if message.starts_with("control character") {
        byte = locate_control_character(text.as_bytes(), byte);
    }
    (TextPosition::from_byte_offset(text, byte), message)
}

/// The parser may report the control character itself or the byte after
/// it; settle on the character.
fn locate_control_character(bytes: &[u8], byte: usize) -> usize {
    let is_control = |index: usize| bytes.get(index).is_some_and(|b| *b < 0x20);
    if is_control(byte) {
        byte
    } else if is_control(byte + 1) {
        byte + 1
    } else if byte > 0 && is_control(byte - 1) {
        byte - 1
    } else {
        byte
    }
}
