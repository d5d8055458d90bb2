//! File checks and chapter validation.

use std::fs;

use guide_model::{
    Catalog, Chapter, ChapterId, Exercise, ExercisesSection, IssueSeverity, Section,
    TheorySection,
};
use guide_validate::{FileCheck, check_file, validate_chapter};

#[test]
fn valid_file_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capitulo_20.json");
    fs::write(&path, "{\"capitulo_id\": 20}").unwrap();

    assert_eq!(check_file(&path, true).unwrap(), FileCheck::Valid);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"capitulo_id\": 20}");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let check = check_file(&dir.path().join("capitulo_22.json"), true).unwrap();
    assert_eq!(check, FileCheck::Missing);
    assert!(!check.is_ok());
}

#[test]
fn cleanup_strips_control_characters_and_rewrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capitulo_22.json");
    fs::write(&path, "{\"titulo\": \"Entrop\u{1}ía\", \"capitulo_id\": 22}").unwrap();

    let check = check_file(&path, true).unwrap();

    let FileCheck::Cleaned { error, removed } = check else {
        panic!("expected a cleaned file, got {check:?}");
    };
    assert_eq!(removed, 1);
    assert_eq!(error.position.line, 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"titulo\": \"Entropía\",\n  \"capitulo_id\": 22\n}\n"
    );
}

#[test]
fn without_cleanup_the_file_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capitulo_21.json");
    let raw = "{\"titulo\": \"a\tb\"}";
    fs::write(&path, raw).unwrap();

    let check = check_file(&path, false).unwrap();

    assert!(matches!(check, FileCheck::Invalid { after_cleanup: None, .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn cleanup_cannot_fix_structural_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capitulo_19.json");
    let raw = "{\"titulo\": \"a\",}";
    fs::write(&path, raw).unwrap();

    let check = check_file(&path, true).unwrap();

    let FileCheck::Invalid {
        error,
        after_cleanup,
    } = check
    else {
        panic!("expected an invalid file");
    };
    assert_eq!(error.message, "key must be a string");
    assert_eq!(error.position.line, 1);
    assert!(after_cleanup.is_some());
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

fn chapter(id: u32, title: &str, date: &str, sections: Vec<Section>) -> Chapter {
    Chapter {
        id: ChapterId::new(id),
        title: title.to_string(),
        part: String::new(),
        generation_date: date.to_string(),
        sections,
    }
}

fn theory(body: &str) -> Section {
    Section::Theory(TheorySection {
        title: "Teoría".to_string(),
        body: body.to_string(),
    })
}

fn exercises(items: Vec<Exercise>) -> Section {
    Section::Exercises(ExercisesSection {
        title: "Ejercicios".to_string(),
        items,
    })
}

#[test]
fn clean_chapter_has_no_issues() {
    let catalog = Catalog::serway_volume_one();
    let chapter = chapter(
        21,
        "Capítulo 21: Entropía",
        "2025-10-01",
        vec![
            theory("$$\\Delta S = \\int dQ/T$$"),
            exercises(vec![Exercise {
                statement: "Calcule $$\\Delta S$$.".to_string(),
                solution: "$$\\Delta S = Q/T$$".to_string(),
            }]),
        ],
    );

    let report = validate_chapter(&chapter, &catalog);
    assert!(report.issues.is_empty(), "{:?}", report.issues);
}

#[test]
fn problems_are_reported_with_codes() {
    let catalog = Catalog::serway_volume_one();
    let chapter = chapter(
        30,
        "Capítulo 30",
        "01/10/2025",
        vec![
            exercises(vec![Exercise {
                statement: "$$F = ma".to_string(),
                solution: String::new(),
            }]),
            theory(""),
        ],
    );

    let report = validate_chapter(&chapter, &catalog);
    let codes: Vec<&str> = report.issues.iter().map(|issue| issue.code.as_str()).collect();

    assert_eq!(
        codes,
        vec!["GS001", "GS002", "GS005", "GS006", "GS004", "GS007", "GS009"]
    );
    assert_eq!(report.error_count(), 3);
    let unpaired = &report.issues[3];
    assert_eq!(unpaired.exercise, Some(1));
    assert_eq!(unpaired.severity, IssueSeverity::Warning);
}

#[test]
fn catalog_title_mismatch_is_a_warning() {
    let catalog = Catalog::serway_volume_one();
    let chapter = chapter(
        5,
        "Capítulo 5: Otra cosa",
        "2025-10-01",
        vec![theory("x"), exercises(Vec::new())],
    );

    let report = validate_chapter(&chapter, &catalog);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].code, "GS008");
    assert!(!report.has_errors());
}

#[test]
fn unknown_section_kind_is_a_warning() {
    let catalog = Catalog::serway_volume_one();
    let chapter = chapter(
        21,
        "Capítulo 21: Entropía",
        "2025-10-01",
        vec![theory("x"), exercises(Vec::new()), Section::Unknown],
    );

    let report = validate_chapter(&chapter, &catalog);
    let codes: Vec<&str> = report.issues.iter().map(|issue| issue.code.as_str()).collect();
    assert_eq!(codes, vec!["GS003", "GS010"]);
    assert_eq!(
        report.issues[1].message,
        "section 3 has an unknown 'tipo' and is never displayed"
    );
    assert!(!report.has_errors());
}
