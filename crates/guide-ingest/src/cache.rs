//! Process-wide memoization of parsed chapters.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, PoisonError, RwLock};

use guide_model::ChapterId;

use crate::repository::ChapterRecord;

/// Write-once-per-key cache of chapter records.
///
/// Entries are immutable once inserted and are never evicted; chapter
/// content only changes between process runs. Readers share the lock, and
/// when two loaders race for the same id the first insert wins and both
/// callers receive that record.
#[derive(Debug, Default)]
pub struct ChapterCache {
    entries: RwLock<HashMap<ChapterId, Arc<ChapterRecord>>>,
}

impl ChapterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, chapter: ChapterId) -> Option<Arc<ChapterRecord>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&chapter)
            .cloned()
    }

    /// Inserts `record` unless an entry already exists.
    ///
    /// Returns `Ok` with the new entry when this call inserted it, and `Err`
    /// with the existing entry when another loader got there first.
    pub fn try_insert(
        &self,
        chapter: ChapterId,
        record: ChapterRecord,
    ) -> Result<Arc<ChapterRecord>, Arc<ChapterRecord>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.entry(chapter) {
            Entry::Occupied(existing) => Err(Arc::clone(existing.get())),
            Entry::Vacant(slot) => Ok(Arc::clone(slot.insert(Arc::new(record)))),
        }
    }

    pub fn contains(&self, chapter: ChapterId) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&chapter)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
