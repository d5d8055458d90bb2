//! JSON syntax checking with editor-friendly diagnostics.

use guide_ingest::{TextPosition, json_error_position};
use serde::Serialize;
use serde::de::IgnoredAny;

/// Where and why a document failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonSyntaxError {
    pub message: String,
    pub position: TextPosition,
    /// The full text of the offending line.
    pub line_text: String,
}

impl JsonSyntaxError {
    /// Marker line pointing at the offending column under [`Self::line_text`].
    pub fn caret(&self) -> String {
        format!("{}^", " ".repeat(self.position.column.saturating_sub(1)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JsonCheck {
    Valid,
    Invalid(JsonSyntaxError),
}

impl JsonCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Checks that `content` is syntactically valid JSON.
pub fn check_json_str(content: &str) -> JsonCheck {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    match serde_json::from_str::<IgnoredAny>(content) {
        Ok(_) => JsonCheck::Valid,
        Err(error) => {
            let (position, message) = json_error_position(content, &error);
            let line_text = content
                .lines()
                .nth(position.line.saturating_sub(1))
                .unwrap_or_default()
                .to_string();
            JsonCheck::Invalid(JsonSyntaxError {
                message,
                position,
                line_text,
            })
        }
    }
}

/// Removes every ASCII control character (`U+0000`..=`U+001F`), newlines
/// and tabs included. Returns the cleaned text and the number removed.
pub fn strip_control_characters(content: &str) -> (String, usize) {
    let cleaned: String = content.chars().filter(|c| u32::from(*c) >= 0x20).collect();
    let removed = content.chars().count() - cleaned.chars().count();
    (cleaned, removed)
}
