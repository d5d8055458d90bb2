//! Chapter content checks.
//!
//! Each module covers one family of checks and returns its issues; codes
//! are stable so reports can be compared across runs.
//!
//! | Code  | Severity | Check |
//! |-------|----------|-------|
//! | GS001 | error    | first section is theory |
//! | GS002 | error    | second section is exercises |
//! | GS003 | warning  | no sections beyond the first two |
//! | GS004 | warning  | theory body is not empty |
//! | GS005 | warning  | exercise statement and solution are not empty |
//! | GS006 | warning  | `$$` delimiters are balanced |
//! | GS007 | error    | chapter id is in the catalog |
//! | GS008 | warning  | title matches the catalog |
//! | GS009 | warning  | generation date is an ISO date |
//! | GS010 | warning  | every section has a known `tipo` |

mod content;
mod metadata;
mod structure;

use guide_model::{Catalog, Chapter, ValidationReport};
use tracing::debug;

/// Runs every check against one chapter.
pub fn validate_chapter(chapter: &Chapter, catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::new(chapter.id);

    // 1. Section layout
    for issue in structure::check(chapter) {
        report.add(issue);
    }

    // 2. Empty bodies and LaTeX delimiters
    for issue in content::check(chapter) {
        report.add(issue);
    }

    // 3. Catalog membership, title and date
    for issue in metadata::check(chapter, catalog) {
        report.add(issue);
    }

    debug!(
        chapter = %chapter.id,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "chapter validated"
    );
    report
}
