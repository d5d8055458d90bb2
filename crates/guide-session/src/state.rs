//! Navigation state machine.
//!
//! The viewer has exactly one piece of mutable state: which part and chapter
//! are selected, which tab is showing and which exercises are expanded.
//! Every transition keeps the selected chapter inside the selected part.

use std::collections::BTreeSet;
use std::fmt;

use guide_model::{Catalog, ChapterId, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NavigationError;

/// Tabs of the chapter view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Theory,
    Exercises,
}

impl Tab {
    /// Get display name for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Theory => "Teoría y Conceptos Clave",
            Self::Exercises => "Ejercicios Resueltos",
        }
    }

    /// Get all tabs in order
    pub fn all() -> &'static [Tab] {
        &[Self::Theory, Self::Exercises]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current position in the guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    part: usize,
    chapter: ChapterId,
    tab: Tab,
    expanded: BTreeSet<usize>,
}

impl NavigationState {
    /// Starts on the first chapter of the first part, theory tab.
    pub fn new(catalog: &Catalog) -> Self {
        let first = catalog.first_part();
        Self {
            part: 0,
            chapter: first.first_chapter().unwrap_or(ChapterId::new(1)),
            tab: Tab::Theory,
            expanded: BTreeSet::new(),
        }
    }

    /// Best-effort restore of a previously saved position.
    ///
    /// Unknown parts or chapters fall back to the defaults of [`Self::new`].
    pub fn restore(catalog: &Catalog, part: Option<&str>, chapter: Option<ChapterId>) -> Self {
        let mut state = Self::new(catalog);
        if let Some(part) = part {
            let _ = state.select_part(catalog, part);
        }
        if let Some(chapter) = chapter {
            let _ = state.select_chapter(catalog, chapter);
        }
        state
    }

    pub fn part_index(&self) -> usize {
        self.part
    }

    pub fn part<'a>(&self, catalog: &'a Catalog) -> &'a Part {
        catalog.part_at(self.part).unwrap_or_else(|| catalog.first_part())
    }

    pub fn chapter(&self) -> ChapterId {
        self.chapter
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_expanded(&self, exercise: usize) -> bool {
        self.expanded.contains(&exercise)
    }

    pub fn expanded(&self) -> &BTreeSet<usize> {
        &self.expanded
    }

    /// Selects a part by slug or by 1-based position.
    ///
    /// The chapter is kept when the new part lists it, otherwise it resets
    /// to the part's first chapter.
    pub fn select_part(&mut self, catalog: &Catalog, selector: &str) -> Result<(), NavigationError> {
        let index = catalog
            .part_index(selector)
            .or_else(|| {
                selector
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=catalog.parts().len()).contains(n))
                    .map(|n| n - 1)
            })
            .ok_or_else(|| NavigationError::UnknownPart {
                selector: selector.to_string(),
            })?;
        self.select_part_index(catalog, index)
    }

    /// Selects a part by 0-based index, as the sidebar combo box does.
    pub fn select_part_index(&mut self, catalog: &Catalog, index: usize) -> Result<(), NavigationError> {
        let part = catalog
            .part_at(index)
            .ok_or_else(|| NavigationError::UnknownPart {
                selector: index.to_string(),
            })?;
        self.part = index;
        if !part.contains(self.chapter) {
            let first = part.first_chapter().unwrap_or(self.chapter);
            debug!(part = %part.slug, from = %self.chapter, to = %first, "chapter reset to first of part");
            self.set_chapter(first);
        }
        Ok(())
    }

    /// Selects a chapter of the current part.
    pub fn select_chapter(&mut self, catalog: &Catalog, chapter: ChapterId) -> Result<(), NavigationError> {
        let part = self.part(catalog);
        if !part.contains(chapter) {
            return Err(NavigationError::ChapterNotInPart {
                chapter,
                part: part.slug.clone(),
            });
        }
        if chapter != self.chapter {
            self.set_chapter(chapter);
        }
        Ok(())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Flips one exercise (0-based) between collapsed and expanded.
    pub fn toggle_exercise(&mut self, exercise: usize) {
        if !self.expanded.remove(&exercise) {
            self.expanded.insert(exercise);
        }
    }

    pub fn expand_all(&mut self, exercise_count: usize) {
        self.expanded = (0..exercise_count).collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    fn set_chapter(&mut self, chapter: ChapterId) {
        self.chapter = chapter;
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_chapter_of_first_part() {
        let catalog = Catalog::serway_volume_one();
        let state = NavigationState::new(&catalog);
        assert_eq!(state.part_index(), 0);
        assert_eq!(state.chapter(), ChapterId::new(1));
        assert_eq!(state.tab(), Tab::Theory);
        assert!(state.expanded().is_empty());
    }

    #[test]
    fn parts_can_be_selected_by_position() {
        let catalog = Catalog::serway_volume_one();
        let mut state = NavigationState::new(&catalog);
        state.select_part(&catalog, "2").unwrap();
        assert_eq!(state.part(&catalog).slug, "waves");
        assert_eq!(state.chapter(), ChapterId::new(15));
        assert!(state.select_part(&catalog, "0").is_err());
        assert!(state.select_part(&catalog, "4").is_err());
    }

    #[test]
    fn toggling_twice_collapses() {
        let catalog = Catalog::serway_volume_one();
        let mut state = NavigationState::new(&catalog);
        state.toggle_exercise(2);
        assert!(state.is_expanded(2));
        state.toggle_exercise(2);
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn restore_ignores_stale_positions() {
        let catalog = Catalog::serway_volume_one();
        let state = NavigationState::restore(&catalog, Some("optics"), Some(ChapterId::new(30)));
        assert_eq!(state, NavigationState::new(&catalog));

        let state = NavigationState::restore(&catalog, Some("waves"), Some(ChapterId::new(17)));
        assert_eq!(state.chapter(), ChapterId::new(17));
    }
}
