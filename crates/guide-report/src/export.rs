//! Exporting a content directory into a MyST documentation tree.

use std::path::{Path, PathBuf};

use guide_ingest::{list_chapter_files, parse_chapter_bytes, parse_chapter_file_name};
use guide_model::Catalog;
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::error::{ExportError, Result};
use crate::myst::{chapter_document, index_document};

/// Default extension of exported documents.
pub const MYST_EXTENSION: &str = "myst";

/// Base name of the index document.
pub const INDEX_STEM: &str = "index";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedChapter {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Chapter documents written, in id order.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedChapter>,
    pub index: PathBuf,
}

impl ExportSummary {
    pub fn has_failures(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Exports every `capitulo_*.json` file in `input` to `output` and writes
/// the index. Chapters that fail to parse are skipped and reported.
pub fn export_directory(
    input: &Path,
    output: &Path,
    catalog: &Catalog,
    extension: &str,
) -> Result<ExportSummary> {
    let span = info_span!("export", input = %input.display(), output = %output.display());
    let _guard = span.enter();

    let files = list_chapter_files(input)?;
    std::fs::create_dir_all(output).map_err(|source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(count = files.len(), "exporting chapters");

    let mut summary = ExportSummary::default();
    let mut entries = Vec::new();
    for path in files {
        let Some(chapter_id) = parse_chapter_file_name(&path) else {
            summary.skipped.push(SkippedChapter {
                reason: "file name does not carry a chapter number".to_string(),
                path,
            });
            continue;
        };
        let record = match std::fs::read(&path)
            .map_err(|error| error.to_string())
            .and_then(|bytes| {
                parse_chapter_bytes(chapter_id, &bytes, Some(path.clone()))
                    .map_err(|error| error.to_string())
            }) {
            Ok(record) => record,
            Err(reason) => {
                warn!(path = %path.display(), reason = %reason, "chapter skipped");
                summary.skipped.push(SkippedChapter { path, reason });
                continue;
            }
        };

        let stem = chapter_id.file_stem();
        let target = output.join(format!("{stem}.{extension}"));
        write(&target, &chapter_document(&record.chapter, catalog))?;
        info!(chapter = %chapter_id, path = %target.display(), "chapter exported");
        summary.written.push(target);
        entries.push(stem);
    }

    let index = output.join(format!("{INDEX_STEM}.{extension}"));
    write(&index, &index_document(&entries))?;
    info!(
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        "export finished"
    );
    summary.index = index;
    Ok(summary)
}

fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
