//! Checking chapter files on disk, with optional control-character cleanup.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, ValidateError};
use crate::json_check::{JsonCheck, JsonSyntaxError, check_json_str, strip_control_characters};

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileCheck {
    Valid,
    /// The file was invalid, control characters were stripped and the
    /// file was rewritten.
    Cleaned {
        error: JsonSyntaxError,
        removed: usize,
    },
    /// The file is invalid. `after_cleanup` holds the error left once
    /// control characters were stripped, when cleanup was attempted.
    Invalid {
        error: JsonSyntaxError,
        after_cleanup: Option<JsonSyntaxError>,
    },
    Missing,
}

impl FileCheck {
    /// True for files that are valid JSON now.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Valid | Self::Cleaned { .. })
    }
}

/// Checks one JSON file. With `cleanup`, an invalid file is retried with
/// every control character removed and rewritten pretty-printed when that
/// parses.
pub fn check_file(path: &Path, cleanup: bool) -> Result<FileCheck> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "file not found");
            return Ok(FileCheck::Missing);
        }
        Err(source) => {
            return Err(ValidateError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let error = match check_json_str(&content) {
        JsonCheck::Valid => {
            info!(path = %path.display(), "valid JSON");
            return Ok(FileCheck::Valid);
        }
        JsonCheck::Invalid(error) => error,
    };
    warn!(
        path = %path.display(),
        line = error.position.line,
        column = error.position.column,
        message = %error.message,
        "JSON syntax error"
    );
    if !cleanup {
        return Ok(FileCheck::Invalid {
            error,
            after_cleanup: None,
        });
    }

    let (cleaned, removed) = strip_control_characters(&content);
    let cleaned = cleaned.strip_prefix('\u{feff}').unwrap_or(&cleaned);
    let value: serde_json::Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(_) => {
            let after_cleanup = match check_json_str(cleaned) {
                JsonCheck::Invalid(remaining) => Some(remaining),
                JsonCheck::Valid => None,
            };
            warn!(path = %path.display(), "automatic cleanup failed");
            return Ok(FileCheck::Invalid {
                error,
                after_cleanup,
            });
        }
    };

    let mut pretty =
        serde_json::to_string_pretty(&value).map_err(|source| ValidateError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    pretty.push('\n');
    std::fs::write(path, pretty).map_err(|source| ValidateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), removed, "control characters removed, file rewritten");
    Ok(FileCheck::Cleaned { error, removed })
}
