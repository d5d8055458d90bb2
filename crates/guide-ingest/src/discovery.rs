//! Chapter file discovery.

use std::path::{Path, PathBuf};

use guide_model::{CHAPTER_FILE_PREFIX, ChapterId};

use crate::error::{IngestError, Result};

/// Lists all files in `dir` with the given extension (case-insensitive).
///
/// Returns files sorted by filename.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let wanted = extension.trim_start_matches('.');
    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted));
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Lists `capitulo_*.json` files in the content directory, sorted by name.
pub fn list_chapter_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let files = list_files_with_extension(dir, "json")?;
    Ok(files
        .into_iter()
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem.starts_with(CHAPTER_FILE_PREFIX))
        })
        .collect())
}

/// Extracts the chapter id from a `capitulo_NN.json` path.
pub fn parse_chapter_file_name(path: &Path) -> Option<ChapterId> {
    let stem = path.file_stem()?.to_str()?;
    let digits = stem.strip_prefix(CHAPTER_FILE_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chapter_ids_from_file_names() {
        assert_eq!(
            parse_chapter_file_name(Path::new("json_capitulos/capitulo_05.json")),
            Some(ChapterId::new(5))
        );
        assert_eq!(
            parse_chapter_file_name(Path::new("capitulo_22.json")),
            Some(ChapterId::new(22))
        );
        assert_eq!(parse_chapter_file_name(Path::new("capitulo_.json")), None);
        assert_eq!(parse_chapter_file_name(Path::new("capitulo_5b.json")), None);
        assert_eq!(parse_chapter_file_name(Path::new("index.json")), None);
    }
}
