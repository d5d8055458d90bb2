//! Section layout checks (GS001-GS003, GS010).

use guide_model::{Chapter, StructuralMismatch, ValidationIssue};

pub fn check(chapter: &Chapter) -> Vec<ValidationIssue> {
    chapter
        .structure_issues()
        .into_iter()
        .map(|mismatch| {
            let message = mismatch.to_string();
            match mismatch {
                StructuralMismatch::NoSections | StructuralMismatch::TheoryNotFirst { .. } => {
                    ValidationIssue::error("GS001", message)
                }
                StructuralMismatch::ExercisesMissing
                | StructuralMismatch::ExercisesNotSecond { .. } => {
                    ValidationIssue::error("GS002", message)
                }
                StructuralMismatch::TrailingSections { .. } => {
                    ValidationIssue::warning("GS003", message)
                }
                StructuralMismatch::UnknownSection { .. } => {
                    ValidationIssue::warning("GS010", message)
                }
            }
        })
        .collect()
}
