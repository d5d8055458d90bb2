//! Catalog and header checks (GS007-GS009).

use chrono::NaiveDate;
use guide_model::{Catalog, Chapter, ValidationIssue};

const ISO_DATE: &str = "%Y-%m-%d";

pub fn check(chapter: &Chapter, catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if catalog.contains(chapter.id) {
        let expected = catalog.chapter_title(chapter.id);
        if chapter.title.trim() != expected {
            issues.push(ValidationIssue::warning(
                "GS008",
                format!("title '{}' differs from catalog title '{expected}'", chapter.title),
            ));
        }
    } else {
        issues.push(ValidationIssue::error(
            "GS007",
            format!("chapter {} is not listed in any part", chapter.id),
        ));
    }

    let date = chapter.generation_date.trim();
    if date.is_empty() {
        issues.push(ValidationIssue::warning("GS009", "generation date is missing"));
    } else if NaiveDate::parse_from_str(date, ISO_DATE).is_err() {
        issues.push(ValidationIssue::warning(
            "GS009",
            format!("generation date '{date}' is not YYYY-MM-DD"),
        ));
    }

    issues
}
