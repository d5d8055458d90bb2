//! Text content checks (GS004-GS006).

use guide_model::{Chapter, Section, ValidationIssue};

const DISPLAY_MATH: &str = "$$";

pub fn check(chapter: &Chapter) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for section in &chapter.sections {
        match section {
            Section::Theory(theory) => {
                if theory.body.trim().is_empty() {
                    issues.push(ValidationIssue::warning(
                        "GS004",
                        format!("theory section '{}' has no content", theory.title),
                    ));
                } else if !balanced_display_math(&theory.body) {
                    issues.push(ValidationIssue::warning(
                        "GS006",
                        format!("theory section '{}' has an unpaired '$$'", theory.title),
                    ));
                }
            }
            Section::Exercises(exercises) => {
                for (index, exercise) in exercises.items.iter().enumerate() {
                    let number = index + 1;
                    if exercise.statement.trim().is_empty() {
                        issues.push(
                            ValidationIssue::warning("GS005", "exercise has no statement")
                                .for_exercise(number),
                        );
                    }
                    if exercise.solution.trim().is_empty() {
                        issues.push(
                            ValidationIssue::warning("GS005", "exercise has no solution")
                                .for_exercise(number),
                        );
                    }
                    for (field, text) in [
                        ("statement", &exercise.statement),
                        ("solution", &exercise.solution),
                    ] {
                        if !balanced_display_math(text) {
                            issues.push(
                                ValidationIssue::warning(
                                    "GS006",
                                    format!("exercise {field} has an unpaired '$$'"),
                                )
                                .for_exercise(number),
                            );
                        }
                    }
                }
            }
            Section::Unknown => {}
        }
    }
    issues
}

/// Display math must open and close: an even number of `$$` markers.
fn balanced_display_math(text: &str) -> bool {
    text.matches(DISPLAY_MATH).count() % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_display_math_pairs() {
        assert!(balanced_display_math("$$a$$ y $$b$$"));
        assert!(balanced_display_math("sin ecuaciones"));
        assert!(!balanced_display_math("$$F = ma"));
    }
}
