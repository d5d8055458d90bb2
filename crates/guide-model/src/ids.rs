#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Prefix shared by every chapter file and export document name.
pub const CHAPTER_FILE_PREFIX: &str = "capitulo_";

/// Numeric chapter identifier as it appears in `capitulo_id`.
///
/// The value is not range-checked here; whether an id belongs to the book is
/// decided by the [`Catalog`](crate::Catalog).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ChapterId(u32);

impl ChapterId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-padded file stem, e.g. `capitulo_05`.
    pub fn file_stem(self) -> String {
        format!("{CHAPTER_FILE_PREFIX}{:02}", self.0)
    }

    /// JSON content file name, e.g. `capitulo_05.json`.
    pub fn json_file_name(self) -> String {
        format!("{}.json", self.file_stem())
    }

    /// MyST cross-reference label used by the documentation export.
    pub fn myst_label(self) -> String {
        format!("{CHAPTER_FILE_PREFIX}{}", self.0)
    }
}

impl From<u32> for ChapterId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ChapterId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ModelError::InvalidChapterId(s.to_string()))
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
