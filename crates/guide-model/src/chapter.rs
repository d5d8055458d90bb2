//! Chapter content as authored in the per-chapter JSON files.
//!
//! Field names follow the authoring format (`titulo`, `secciones`, ...);
//! the Rust side uses English names through serde renames.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ChapterId;

/// One unit of study content: theory plus solved exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "capitulo_id")]
    pub id: ChapterId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "parte", default)]
    pub part: String,
    #[serde(rename = "fecha_generacion", default)]
    pub generation_date: String,
    #[serde(rename = "secciones", default)]
    pub sections: Vec<Section>,
}

/// A typed content block, tagged by `tipo` in the source JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum Section {
    #[serde(rename = "teoria")]
    Theory(TheorySection),
    #[serde(rename = "ejercicios")]
    Exercises(ExercisesSection),
    /// Any other `tipo`. Kept so the rest of the chapter still loads.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheorySection {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "contenido_markdown", default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisesSection {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "ejercicios", default)]
    pub items: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Older chapter files used `enunciado` instead of `enunciado_markdown`.
    #[serde(rename = "enunciado_markdown", alias = "enunciado")]
    pub statement: String,
    #[serde(rename = "solucion_markdown", default)]
    pub solution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Theory,
    Exercises,
    Unknown,
}

impl SectionKind {
    /// Tag value used in the source JSON. `Unknown` covers every other tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Theory => "teoria",
            Self::Exercises => "ejercicios",
            Self::Unknown => "desconocido",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Theory(_) => SectionKind::Theory,
            Self::Exercises(_) => SectionKind::Exercises,
            Self::Unknown => SectionKind::Unknown,
        }
    }

    /// Empty for sections of an unknown kind.
    pub fn title(&self) -> &str {
        match self {
            Self::Theory(theory) => &theory.title,
            Self::Exercises(exercises) => &exercises.title,
            Self::Unknown => "",
        }
    }
}

/// Deviation from the expected theory-then-exercises layout.
///
/// These never fail a load; viewers degrade the affected tab instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralMismatch {
    #[error("chapter has no sections")]
    NoSections,
    #[error("first section is '{found}', expected 'teoria'")]
    TheoryNotFirst { found: SectionKind },
    #[error("second section is missing, expected 'ejercicios'")]
    ExercisesMissing,
    #[error("second section is '{found}', expected 'ejercicios'")]
    ExercisesNotSecond { found: SectionKind },
    #[error("{count} section(s) after the exercises are never displayed")]
    TrailingSections { count: usize },
    #[error("section {position} has an unknown 'tipo' and is never displayed")]
    UnknownSection { position: usize },
}

impl Chapter {
    /// The theory section, when it sits in the first slot.
    pub fn theory(&self) -> Option<&TheorySection> {
        match self.sections.first() {
            Some(Section::Theory(theory)) => Some(theory),
            _ => None,
        }
    }

    /// The exercises section, when it sits in the second slot.
    pub fn exercises(&self) -> Option<&ExercisesSection> {
        match self.sections.get(1) {
            Some(Section::Exercises(exercises)) => Some(exercises),
            _ => None,
        }
    }

    pub fn exercise_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| match section {
                Section::Exercises(exercises) => exercises.items.len(),
                Section::Theory(_) | Section::Unknown => 0,
            })
            .sum()
    }

    /// Checks the section list against the theory-then-exercises layout.
    pub fn structure_issues(&self) -> Vec<StructuralMismatch> {
        let mut issues = Vec::new();
        let Some(first) = self.sections.first() else {
            issues.push(StructuralMismatch::NoSections);
            return issues;
        };
        if first.kind() != SectionKind::Theory {
            issues.push(StructuralMismatch::TheoryNotFirst {
                found: first.kind(),
            });
        }
        match self.sections.get(1) {
            None => issues.push(StructuralMismatch::ExercisesMissing),
            Some(second) if second.kind() != SectionKind::Exercises => {
                issues.push(StructuralMismatch::ExercisesNotSecond {
                    found: second.kind(),
                });
            }
            Some(_) => {}
        }
        if self.sections.len() > 2 {
            issues.push(StructuralMismatch::TrailingSections {
                count: self.sections.len() - 2,
            });
        }
        for (index, section) in self.sections.iter().enumerate() {
            if matches!(section, Section::Unknown) {
                issues.push(StructuralMismatch::UnknownSection {
                    position: index + 1,
                });
            }
        }
        issues
    }
}
