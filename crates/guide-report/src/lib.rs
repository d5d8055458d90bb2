//! MyST documentation export for the physics study guide.
//!
//! Chapters become standalone MyST documents with collapsible solutions,
//! and an index document ties them together in a toctree.

mod error;
mod export;
mod myst;

pub use error::{ExportError, Result};
pub use export::{ExportSummary, INDEX_STEM, MYST_EXTENSION, SkippedChapter, export_directory};
pub use myst::{INDEX_INTRO, INDEX_TITLE, chapter_document, clean_markdown, index_document};
