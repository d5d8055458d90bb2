//! In-place repair of MyST documents, one line at a time.

use std::path::{Path, PathBuf};

use guide_ingest::{IngestError, list_files_with_extension};
use serde::Serialize;
use tracing::{error, info, info_span, warn};

use crate::error::{RepairError, Result};
use crate::table::ReplacementTable;

/// Whether repairs are written back or only reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RepairMode {
    #[default]
    Write,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RepairOutcome {
    /// At least one replacement was made (and written unless dry-running).
    Corrected { replacements: usize },
    Unchanged,
    Failed { message: String },
}

impl RepairOutcome {
    pub(crate) fn from_result(path: &Path, result: Result<usize>) -> Self {
        match result {
            Ok(0) => Self::Unchanged,
            Ok(replacements) => Self::Corrected { replacements },
            Err(err) => {
                error!(path = %path.display(), error = %err, "repair failed");
                Self::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: RepairOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryStatus {
    Processed,
    Missing,
    Unreadable,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryReport {
    pub dir: PathBuf,
    pub status: DirectoryStatus,
    pub files: Vec<FileReport>,
}

/// Repairs one document line by line. Line endings are preserved.
pub fn repair_file(path: &Path, table: &ReplacementTable, mode: RepairMode) -> RepairOutcome {
    RepairOutcome::from_result(path, try_repair_file(path, table, mode))
}

fn try_repair_file(path: &Path, table: &ReplacementTable, mode: RepairMode) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| RepairError::io(path, e))?;
    let mut repaired = String::with_capacity(content.len());
    let mut replacements = 0;
    for line in content.split_inclusive('\n') {
        let (fixed, count) = table.apply(line);
        repaired.push_str(&fixed);
        replacements += count;
    }
    if replacements > 0 && mode == RepairMode::Write {
        std::fs::write(path, repaired).map_err(|e| RepairError::io(path, e))?;
    }
    Ok(replacements)
}

/// Repairs every `*.{extension}` file in each directory, sequentially.
///
/// Missing and empty directories are reported and skipped; a failed file
/// does not stop the batch.
pub fn repair_directories(
    dirs: &[PathBuf],
    extension: &str,
    table: &ReplacementTable,
    mode: RepairMode,
) -> Vec<DirectoryReport> {
    let span = info_span!("repair_directories", dry_run = mode == RepairMode::DryRun);
    let _guard = span.enter();

    for rule in table.non_idempotent_rules() {
        warn!(broken = %rule.broken, fixed = %rule.fixed, "rule is not idempotent, re-running compounds it");
    }

    dirs.iter()
        .map(|dir| {
            let files = match list_files_with_extension(dir, extension) {
                Ok(files) => files,
                Err(IngestError::DirectoryNotFound { .. }) => {
                    warn!(dir = %dir.display(), "directory not found");
                    return DirectoryReport {
                        dir: dir.clone(),
                        status: DirectoryStatus::Missing,
                        files: Vec::new(),
                    };
                }
                Err(err) => {
                    error!(dir = %dir.display(), error = %err, "directory could not be read");
                    return DirectoryReport {
                        dir: dir.clone(),
                        status: DirectoryStatus::Unreadable,
                        files: Vec::new(),
                    };
                }
            };
            if files.is_empty() {
                warn!(dir = %dir.display(), extension, "no files to repair");
                return DirectoryReport {
                    dir: dir.clone(),
                    status: DirectoryStatus::Empty,
                    files: Vec::new(),
                };
            }
            info!(dir = %dir.display(), count = files.len(), "repairing directory");
            let files = files
                .into_iter()
                .map(|path| {
                    let outcome = repair_file(&path, table, mode);
                    FileReport { path, outcome }
                })
                .collect();
            DirectoryReport {
                dir: dir.clone(),
                status: DirectoryStatus::Processed,
                files,
            }
        })
        .collect()
}
