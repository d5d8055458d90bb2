//! Repairs applied to the markdown fields of chapter JSON files.

use std::path::{Path, PathBuf};

use guide_ingest::{Result as IngestResult, list_files_with_extension};
use serde_json::Value;
use tracing::info;

use crate::error::{RepairError, Result};
use crate::myst::{FileReport, RepairMode, RepairOutcome};
use crate::table::ReplacementTable;

const THEORY_FIELD: &str = "contenido_markdown";
const SOLUTION_FIELD: &str = "solucion_markdown";

/// Applies `table` to every theory body and exercise solution of a chapter
/// file and rewrites it pretty-printed with key order kept.
///
/// Files that are not valid JSON are reported as failed and left untouched.
pub fn repair_chapter_json(path: &Path, table: &ReplacementTable, mode: RepairMode) -> RepairOutcome {
    RepairOutcome::from_result(path, try_repair_chapter_json(path, table, mode))
}

/// Runs [`repair_chapter_json`] over every `*.json` file in `dir`, in name
/// order.
pub fn repair_chapter_directory(
    dir: &Path,
    table: &ReplacementTable,
    mode: RepairMode,
) -> IngestResult<Vec<FileReport>> {
    let files = list_files_with_extension(dir, "json")?;
    info!(dir = %dir.display(), count = files.len(), "repairing chapter files");
    Ok(files
        .into_iter()
        .map(|path| {
            let outcome = repair_chapter_json(&path, table, mode);
            FileReport { path, outcome }
        })
        .collect())
}

fn try_repair_chapter_json(path: &Path, table: &ReplacementTable, mode: RepairMode) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| RepairError::io(path, e))?;
    let mut document: Value =
        serde_json::from_str(content.strip_prefix('\u{feff}').unwrap_or(&content)).map_err(
            |source| RepairError::InvalidJson {
                path: path.to_path_buf(),
                source,
            },
        )?;

    let replacements = repair_markdown_fields(&mut document, table);
    if replacements > 0 && mode == RepairMode::Write {
        write_pretty(path, &document)?;
    }
    Ok(replacements)
}

/// Rewrites the markdown fields in place and returns the replacement count.
pub fn repair_markdown_fields(document: &mut Value, table: &ReplacementTable) -> usize {
    let Some(sections) = document.get_mut("secciones").and_then(Value::as_array_mut) else {
        return 0;
    };
    let mut replacements = 0;
    for section in sections {
        replacements += repair_field(section, THEORY_FIELD, table);
        if let Some(exercises) = section.get_mut("ejercicios").and_then(Value::as_array_mut) {
            for exercise in exercises {
                replacements += repair_field(exercise, SOLUTION_FIELD, table);
            }
        }
    }
    replacements
}

fn repair_field(object: &mut Value, field: &str, table: &ReplacementTable) -> usize {
    let Some(Value::String(text)) = object.get_mut(field) else {
        return 0;
    };
    let (fixed, count) = table.apply(text);
    if count > 0 {
        *text = fixed;
    }
    count
}

fn write_pretty(path: &Path, document: &Value) -> Result<()> {
    let mut pretty =
        serde_json::to_string_pretty(document).map_err(|source| RepairError::Serialize {
            path: PathBuf::from(path),
            source,
        })?;
    pretty.push('\n');
    std::fs::write(path, pretty).map_err(|e| RepairError::io(path, e))
}
