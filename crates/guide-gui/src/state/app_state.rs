//! Application-level state

use std::path::PathBuf;

use guide_ingest::ChapterRepository;
use guide_model::{Catalog, ChapterId};
use guide_session::{ExercisesTab, NavigationState, Page, Tab, render};

use crate::settings::Settings;

/// Top-level application state.
///
/// Every navigation change re-renders [`Page`]; the repository memoizes
/// chapters so only the first visit of a chapter touches the disk.
pub struct AppState {
    pub settings: Settings,
    catalog: Catalog,
    navigation: NavigationState,
    repository: ChapterRepository,
    page: Page,
    /// Set when settings changed and should be written back.
    settings_dirty: bool,
}

impl AppState {
    /// Restores the last position recorded in `settings`.
    pub fn new(settings: Settings) -> Self {
        let catalog = Catalog::serway_volume_one();
        let navigation = NavigationState::restore(
            &catalog,
            settings.last_part.as_deref(),
            settings.last_chapter,
        );
        let repository = ChapterRepository::new(&settings.content_dir, &catalog);
        let page = render(&navigation, &catalog, &repository);
        Self {
            settings,
            catalog,
            navigation,
            repository,
            page,
            settings_dirty: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Selects a part by its position in the combo box.
    pub fn select_part(&mut self, index: usize) {
        if index == self.navigation.part_index() {
            return;
        }
        match self.navigation.select_part_index(&self.catalog, index) {
            Ok(()) => self.position_changed(),
            Err(error) => tracing::warn!(%error, "part selection ignored"),
        }
    }

    pub fn select_chapter(&mut self, chapter: ChapterId) {
        if chapter == self.navigation.chapter() {
            return;
        }
        match self.navigation.select_chapter(&self.catalog, chapter) {
            Ok(()) => self.position_changed(),
            Err(error) => tracing::warn!(%error, "chapter selection ignored"),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.navigation.select_tab(tab);
    }

    /// Moves to the neighbouring tab, `forward` meaning left to right.
    pub fn cycle_tab(&mut self, forward: bool) {
        let tabs = Tab::all();
        let current = tabs
            .iter()
            .position(|tab| *tab == self.navigation.tab())
            .unwrap_or(0);
        let next = if forward {
            (current + 1).min(tabs.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        self.navigation.select_tab(tabs[next]);
    }

    /// Steps to the previous or next chapter of the current part.
    pub fn step_chapter(&mut self, forward: bool) {
        let part = self.navigation.part(&self.catalog);
        let Some(position) = part
            .chapters
            .iter()
            .position(|&chapter| chapter == self.navigation.chapter())
        else {
            return;
        };
        let target = if forward {
            part.chapters.get(position + 1)
        } else {
            position.checked_sub(1).and_then(|i| part.chapters.get(i))
        };
        if let Some(&chapter) = target {
            self.select_chapter(chapter);
        }
    }

    /// Flips one exercise (0-based) and re-renders.
    pub fn toggle_exercise(&mut self, exercise: usize) {
        self.navigation.toggle_exercise(exercise);
        self.refresh();
    }

    pub fn expand_all(&mut self) {
        let count = match &self.page {
            Page::Chapter(page) => match &page.exercises {
                ExercisesTab::Items { items, .. } => items.len(),
                ExercisesTab::Empty { .. } => 0,
            },
            Page::Error { .. } => 0,
        };
        self.navigation.expand_all(count);
        self.refresh();
    }

    pub fn collapse_all(&mut self) {
        self.navigation.collapse_all();
        self.refresh();
    }

    /// Points the viewer at another content directory.
    ///
    /// A fresh repository is created, so chapters cached from the previous
    /// directory are dropped.
    pub fn set_content_dir(&mut self, dir: PathBuf) {
        tracing::info!(dir = %dir.display(), "content directory changed");
        self.repository = ChapterRepository::new(&dir, &self.catalog);
        self.settings.content_dir = dir;
        self.settings_dirty = true;
        self.refresh();
    }

    /// Drops cached chapters and reads the current one again.
    pub fn reload(&mut self) {
        self.repository = ChapterRepository::new(&self.settings.content_dir, &self.catalog);
        self.refresh();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.settings_dirty = true;
    }

    /// Returns whether settings need saving and clears the flag.
    pub fn take_settings_dirty(&mut self) -> bool {
        std::mem::take(&mut self.settings_dirty)
    }

    fn position_changed(&mut self) {
        self.settings.last_part = Some(self.navigation.part(&self.catalog).slug.clone());
        self.settings.last_chapter = Some(self.navigation.chapter());
        self.settings_dirty = true;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.page = render(&self.navigation, &self.catalog, &self.repository);
    }
}
