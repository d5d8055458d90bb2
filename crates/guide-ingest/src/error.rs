//! Error types for chapter ingestion.

use std::path::PathBuf;

use guide_model::ChapterId;
use thiserror::Error;

/// Failures while listing content directories.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not a directory.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Coarse classification of [`LoadError`], useful for matching in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NotFound,
    MalformedContent,
    Unknown,
}

/// Failure to load a single chapter record.
///
/// Errors carry plain data so they can be cloned into view models and
/// compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// No content record exists for the chapter.
    #[error("chapter {chapter} not found: {}", path.display())]
    NotFound { chapter: ChapterId, path: PathBuf },

    /// The record exists but is not valid chapter JSON.
    ///
    /// `offset` counts characters from the start of the raw file, including
    /// a leading byte order mark. `line` and `column` are 1-based and do not
    /// count the mark, matching what a text editor shows.
    #[error(
        "malformed JSON in chapter {chapter} (position {offset}, line {line}, column {column}): {message}"
    )]
    MalformedContent {
        chapter: ChapterId,
        offset: usize,
        line: usize,
        column: usize,
        message: String,
    },

    /// Anything else (permissions, I/O failures).
    #[error("unknown error loading chapter {chapter}: {message}")]
    Unknown { chapter: ChapterId, message: String },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::NotFound { .. } => LoadErrorKind::NotFound,
            Self::MalformedContent { .. } => LoadErrorKind::MalformedContent,
            Self::Unknown { .. } => LoadErrorKind::Unknown,
        }
    }

    pub fn chapter(&self) -> ChapterId {
        match self {
            Self::NotFound { chapter, .. }
            | Self::MalformedContent { chapter, .. }
            | Self::Unknown { chapter, .. } => *chapter,
        }
    }
}
