//! Chapter repository backed by a directory of JSON files.
//!
//! # Storage Format
//!
//! One file per chapter named `capitulo_{id:02}.json` inside the content
//! directory. Files are read once and memoized in a [`ChapterCache`] for the
//! lifetime of the repository.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use guide_model::{Catalog, Chapter, ChapterId, StructuralMismatch};
use sha2::{Digest, Sha256};
use tracing::{debug, info, trace, warn};

use crate::cache::ChapterCache;
use crate::error::LoadError;
use crate::position::{TextPosition, json_error_position};

/// Default content directory, relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "json_capitulos";

/// A parsed chapter together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    pub chapter: Chapter,
    /// File the chapter was read from (`None` for in-memory records).
    pub source_path: Option<PathBuf>,
    /// Lowercase hex SHA-256 of the raw file contents.
    pub digest: String,
    /// Layout deviations found at load time.
    pub structure_issues: Vec<StructuralMismatch>,
}

impl ChapterRecord {
    /// Wraps an already-parsed chapter, running the structural check.
    pub fn from_chapter(chapter: Chapter, source_path: Option<PathBuf>, digest: String) -> Self {
        let structure_issues = chapter.structure_issues();
        Self {
            chapter,
            source_path,
            digest,
            structure_issues,
        }
    }
}

/// Anything that can hand out chapter records by id.
pub trait ChapterSource {
    fn load(&self, chapter: ChapterId) -> Result<Arc<ChapterRecord>, LoadError>;
}

/// File-system chapter repository with memoization.
#[derive(Debug)]
pub struct ChapterRepository {
    content_dir: PathBuf,
    known: BTreeSet<ChapterId>,
    cache: ChapterCache,
}

impl ChapterRepository {
    /// Creates a repository serving the chapters listed in `catalog`.
    pub fn new(content_dir: impl Into<PathBuf>, catalog: &Catalog) -> Self {
        Self {
            content_dir: content_dir.into(),
            known: catalog.chapter_ids().collect(),
            cache: ChapterCache::new(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn chapter_path(&self, chapter: ChapterId) -> PathBuf {
        self.content_dir.join(chapter.json_file_name())
    }

    pub fn cache(&self) -> &ChapterCache {
        &self.cache
    }

    /// Loads every catalog chapter, in id order.
    pub fn load_all(&self) -> Vec<(ChapterId, Result<Arc<ChapterRecord>, LoadError>)> {
        self.known
            .iter()
            .map(|&chapter| (chapter, self.load(chapter)))
            .collect()
    }

    fn read_record(&self, chapter: ChapterId) -> Result<ChapterRecord, LoadError> {
        let path = self.chapter_path(chapter);
        let bytes = std::fs::read(&path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                chapter,
                path: path.clone(),
            },
            _ => LoadError::Unknown {
                chapter,
                message: format!("{}: {error}", path.display()),
            },
        })?;
        let record = parse_chapter_bytes(chapter, &bytes, Some(path.clone()))?;
        if record.chapter.id != chapter {
            warn!(
                chapter = %chapter,
                declared = %record.chapter.id,
                path = %path.display(),
                "capitulo_id does not match file name"
            );
        }
        Ok(record)
    }
}

impl ChapterSource for ChapterRepository {
    fn load(&self, chapter: ChapterId) -> Result<Arc<ChapterRecord>, LoadError> {
        if !self.known.contains(&chapter) {
            debug!(chapter = %chapter, "chapter outside catalog range");
            return Err(LoadError::NotFound {
                chapter,
                path: self.chapter_path(chapter),
            });
        }
        if let Some(record) = self.cache.get(chapter) {
            trace!(chapter = %chapter, "chapter cache hit");
            return Ok(record);
        }
        let record = match self.cache.try_insert(chapter, self.read_record(chapter)?) {
            Ok(record) => record,
            Err(existing) => {
                trace!(chapter = %chapter, "chapter cached by a concurrent load");
                return Ok(existing);
            }
        };
        let short_digest = record.digest.get(..12).unwrap_or(&record.digest);
        info!(
            chapter = %chapter,
            sections = record.chapter.sections.len(),
            exercises = record.chapter.exercise_count(),
            digest = short_digest,
            "chapter loaded"
        );
        for issue in &record.structure_issues {
            warn!(chapter = %chapter, issue = %issue, "chapter structure mismatch");
        }
        Ok(record)
    }
}

/// Parses raw chapter bytes, reporting UTF-8 and JSON failures with the
/// character offset of the offending character.
///
/// A leading UTF-8 byte order mark is skipped for parsing but still counted
/// in reported offsets.
pub fn parse_chapter_bytes(
    chapter: ChapterId,
    bytes: &[u8],
    source_path: Option<PathBuf>,
) -> Result<ChapterRecord, LoadError> {
    let digest = hex::encode(Sha256::digest(bytes));
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            let valid = String::from_utf8_lossy(&bytes[..error.valid_up_to()]);
            let (valid, bom) = strip_bom(&valid);
            let position = TextPosition::from_byte_offset(valid, valid.len());
            return Err(LoadError::MalformedContent {
                chapter,
                offset: position.offset + bom,
                line: position.line,
                column: position.column,
                message: "invalid UTF-8".to_string(),
            });
        }
    };
    let parsed = parse_chapter(chapter, text)?;
    Ok(ChapterRecord::from_chapter(parsed, source_path, digest))
}

/// Parses chapter JSON text.
pub fn parse_chapter(chapter: ChapterId, text: &str) -> Result<Chapter, LoadError> {
    let (text, bom) = strip_bom(text);
    serde_json::from_str(text).map_err(|error| {
        if error.is_io() {
            return LoadError::Unknown {
                chapter,
                message: error.to_string(),
            };
        }
        let (position, message) = json_error_position(text, &error);
        LoadError::MalformedContent {
            chapter,
            offset: position.offset + bom,
            line: position.line,
            column: position.column,
            message,
        }
    })
}

/// Splits off a leading byte order mark, returning the rest and the number
/// of characters removed.
fn strip_bom(text: &str) -> (&str, usize) {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => (rest, 1),
        None => (text, 0),
    }
}

/// Fixed set of in-memory chapters, for previews and tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: std::collections::BTreeMap<ChapterId, Arc<ChapterRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chapter: Chapter) {
        let id = chapter.id;
        let digest = serde_json::to_vec(&chapter)
            .map(|bytes| hex::encode(Sha256::digest(&bytes)))
            .unwrap_or_default();
        self.records
            .insert(id, Arc::new(ChapterRecord::from_chapter(chapter, None, digest)));
    }

    #[must_use]
    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.insert(chapter);
        self
    }
}

impl ChapterSource for MemorySource {
    fn load(&self, chapter: ChapterId) -> Result<Arc<ChapterRecord>, LoadError> {
        self.records
            .get(&chapter)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                chapter,
                path: PathBuf::from(chapter.json_file_name()),
            })
    }
}
