//! Viewer settings persisted between runs.
//!
//! Besides the theme and content directory, the viewer remembers the part
//! and chapter that were open so the next launch resumes there.

mod persistence;

pub use persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};

use guide_ingest::DEFAULT_CONTENT_DIR;
use guide_model::ChapterId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    /// Directory holding `capitulo_NN.json` files.
    pub content_dir: PathBuf,
    /// Slug of the part open when the viewer was closed.
    pub last_part: Option<String>,
    pub last_chapter: Option<ChapterId>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            last_part: None,
            last_chapter: None,
        }
    }
}
