//! Ordered literal replacement tables.
//!
//! A table is a list of `(broken, fixed)` pairs applied in order; every
//! occurrence of `broken` is replaced. Tables are plain literals, no
//! pattern syntax.
//!
//! # File Format
//!
//! ```toml
//! [[rule]]
//! broken = '1\text{cm}'
//! fixed = '$1 \mathrm{cm}$'
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RepairError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub broken: String,
    pub fixed: String,
}

impl ReplacementRule {
    pub fn new(broken: impl Into<String>, fixed: impl Into<String>) -> Self {
        Self {
            broken: broken.into(),
            fixed: fixed.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TableFile {
    #[serde(rename = "rule", default)]
    rules: Vec<ReplacementRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
}

impl ReplacementTable {
    /// Builds a table, rejecting rules with an empty `broken` pattern.
    pub fn new(rules: Vec<ReplacementRule>) -> Result<Self> {
        if let Some(index) = rules.iter().position(|rule| rule.broken.is_empty()) {
            return Err(RepairError::EmptyPattern { index: index + 1 });
        }
        Ok(Self { rules })
    }

    /// Unit and vector fixes for common OCR damage in the lecture notes.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ReplacementRule::new("1\\text{cm}", "$1 \\mathrm{cm}$"),
                ReplacementRule::new("10\\text{kg}", "$10 \\mathrm{kg}$"),
                ReplacementRule::new("V = (V ,V ,V ),", "$\\vec{V} = (V_x, V_y, V_z)$"),
                ReplacementRule::new(
                    "V = V2 +V2. | | x y q",
                    "$$V = \\sqrt{V^2_x + V^2_y}$$",
                ),
                ReplacementRule::new(
                    "V +V = (V +V ,V +V +,V +V ),",
                    "$$\\vec{V}_1 + \\vec{V}_2 = (V_{1x} + V_{2x}, V_{1y} + V_{2y}, V_{1z} + V_{2z})$$",
                ),
            ],
        }
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let file: TableFile = toml::from_str(content).map_err(|source| RepairError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        Self::new(file.rules)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RepairError::io(path, e))?;
        Self::from_toml_str(&content, path)
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order, returning the new text and the number
    /// of replacements made.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut current = text.to_string();
        let mut replacements = 0;
        for rule in &self.rules {
            let count = current.matches(rule.broken.as_str()).count();
            if count > 0 {
                current = current.replace(rule.broken.as_str(), &rule.fixed);
                replacements += count;
            }
        }
        (current, replacements)
    }

    /// Rules whose output the table would rewrite again on a second run.
    ///
    /// Re-running such a table over already repaired files compounds the
    /// substitution (e.g. `\frac{` to `$$\\frac{` keeps adding `$$`).
    pub fn non_idempotent_rules(&self) -> Vec<&ReplacementRule> {
        self.rules
            .iter()
            .filter(|rule| self.apply(&rule.fixed).1 > 0)
            .collect()
    }
}
