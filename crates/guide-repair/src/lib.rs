//! Content repair utilities for the physics study guide.
//!
//! Repairs are literal: a [`ReplacementTable`] maps broken fragments to
//! their fixed form and is applied to MyST documents line by line or to the
//! markdown fields of chapter JSON files. Batches run one file at a time and
//! never roll back earlier files.

mod error;
mod json_fields;
mod myst;
mod ocr;
mod table;

pub use error::{RepairError, Result};
pub use json_fields::{repair_chapter_directory, repair_chapter_json, repair_markdown_fields};
pub use myst::{
    DirectoryReport, DirectoryStatus, FileReport, RepairMode, RepairOutcome, repair_directories,
    repair_file,
};
pub use ocr::{
    OCR_SUFFIX, fix_unit_fragments, import_text_file, normalize_ocr_text, ocr_output_file_name,
    replace_unescaped,
};
pub use table::{ReplacementRule, ReplacementTable};
