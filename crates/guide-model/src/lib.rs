//! Data model for the physics study guide.

pub mod catalog;
pub mod chapter;
pub mod error;
pub mod ids;
pub mod issues;

pub use catalog::{Catalog, Diagram, Part};
pub use chapter::{
    Chapter, Exercise, ExercisesSection, Section, SectionKind, StructuralMismatch, TheorySection,
};
pub use error::{ModelError, Result};
pub use ids::{CHAPTER_FILE_PREFIX, ChapterId};
pub use issues::{IssueSeverity, ValidationIssue, ValidationReport};
