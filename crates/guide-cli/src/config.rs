//! Command line configuration.
//!
//! Values are resolved in this order, later sources winning: built-in
//! defaults, the `--config` TOML file, the `PHYSICS_GUIDE_CONTENT_DIR`
//! environment variable, then explicit command line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use guide_ingest::DEFAULT_CONTENT_DIR;
use guide_report::MYST_EXTENSION;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the content directory.
pub const CONTENT_DIR_ENV: &str = "PHYSICS_GUIDE_CONTENT_DIR";

pub const DEFAULT_DOCS_DIR: &str = "docs";
pub const DEFAULT_REPAIR_DIRS: &[&str] = &["docs/capitulos_guia", "docs/clases_teoria"];
pub const DEFAULT_IMPORT_DIR: &str = "docs_limpios";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    /// Directory holding `capitulo_NN.json` files.
    pub content_dir: PathBuf,
    /// Output directory of the MyST export.
    pub docs_dir: PathBuf,
    /// Directories scanned by `repair-myst`.
    pub repair_dirs: Vec<PathBuf>,
    pub myst_extension: String,
    /// Replacement table used instead of the built-in one.
    pub rules: Option<PathBuf>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            repair_dirs: DEFAULT_REPAIR_DIRS.iter().map(PathBuf::from).collect(),
            myst_extension: MYST_EXTENSION.to_string(),
            rules: None,
        }
    }
}

impl GuideConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Loads the file when given, then applies the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_content_dir_override(std::env::var_os(CONTENT_DIR_ENV).map(PathBuf::from)))
    }

    #[must_use]
    pub fn with_content_dir_override(mut self, content_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = content_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            self.content_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_content_layout() {
        let config = GuideConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("json_capitulos"));
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.repair_dirs.len(), 2);
        assert_eq!(config.myst_extension, "myst");
    }

    #[test]
    fn partial_files_keep_defaults() {
        let config = GuideConfig::from_toml_str("content_dir = \"capitulos\"\n").unwrap();
        assert_eq!(config.content_dir, PathBuf::from("capitulos"));
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(GuideConfig::from_toml_str("content = \"x\"\n").is_err());
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = GuideConfig::default().with_content_dir_override(Some(PathBuf::new()));
        assert_eq!(config.content_dir, PathBuf::from("json_capitulos"));
    }
}
