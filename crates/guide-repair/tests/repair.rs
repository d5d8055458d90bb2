//! Batch repairs over scratch directories.

use std::fs;
use std::path::PathBuf;

use guide_repair::{
    DirectoryStatus, RepairMode, RepairOutcome, ReplacementRule, ReplacementTable,
    import_text_file, repair_chapter_directory, repair_chapter_json, repair_directories,
    repair_file,
};

fn cm_table() -> ReplacementTable {
    ReplacementTable::new(vec![ReplacementRule::new("1\\text{cm}", "$1 \\mathrm{cm}$")]).unwrap()
}

#[test]
fn repairs_lines_in_place_and_keeps_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capitulo_01.myst");
    fs::write(&path, "Longitud 1\\text{cm}\r\nOtra 1\\text{cm} y 1\\text{cm}\nfin").unwrap();

    let outcome = repair_file(&path, &cm_table(), RepairMode::Write);

    assert_eq!(outcome, RepairOutcome::Corrected { replacements: 3 });
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Longitud $1 \\mathrm{cm}$\r\nOtra $1 \\mathrm{cm}$ y $1 \\mathrm{cm}$\nfin"
    );
    assert_eq!(repair_file(&path, &cm_table(), RepairMode::Write), RepairOutcome::Unchanged);
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clase_01.myst");
    fs::write(&path, "1\\text{cm}").unwrap();

    let outcome = repair_file(&path, &cm_table(), RepairMode::DryRun);

    assert_eq!(outcome, RepairOutcome::Corrected { replacements: 1 });
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\\text{cm}");
}

#[test]
fn unreadable_file_fails_without_stopping_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("b.myst");
    fs::write(dir.path().join("a.myst"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(&good, "1\\text{cm}").unwrap();
    fs::write(dir.path().join("notes.txt"), "1\\text{cm}").unwrap();

    let reports = repair_directories(
        &[dir.path().to_path_buf()],
        "myst",
        &cm_table(),
        RepairMode::Write,
    );

    assert_eq!(reports.len(), 1);
    let files = &reports[0].files;
    assert_eq!(files.len(), 2);
    assert!(files[0].outcome.is_failure());
    assert_eq!(files[1].outcome, RepairOutcome::Corrected { replacements: 1 });
    assert_eq!(fs::read_to_string(good).unwrap(), "$1 \\mathrm{cm}$");
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "1\\text{cm}"
    );
}

#[test]
fn missing_and_empty_directories_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("clases_teoria");
    fs::create_dir(&empty).unwrap();
    let missing: PathBuf = dir.path().join("capitulos_guia");

    let reports = repair_directories(&[missing, empty], "myst", &cm_table(), RepairMode::Write);

    assert_eq!(reports[0].status, DirectoryStatus::Missing);
    assert_eq!(reports[1].status, DirectoryStatus::Empty);
    assert!(reports.iter().all(|report| report.files.is_empty()));
}

#[test]
fn chapter_json_repairs_only_markdown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capitulo_01.json");
    let raw = r#"{"titulo": "1\\text{cm}", "capitulo_id": 1, "secciones": [
        {"tipo": "teoria", "titulo": "T", "contenido_markdown": "mide 1\\text{cm}"},
        {"tipo": "ejercicios", "titulo": "E", "ejercicios": [
            {"enunciado_markdown": "1\\text{cm}", "solucion_markdown": "1\\text{cm}"}
        ]}
    ]}"#;
    fs::write(&path, raw).unwrap();

    let outcome = repair_chapter_json(&path, &cm_table(), RepairMode::Write);

    assert_eq!(outcome, RepairOutcome::Corrected { replacements: 2 });
    let rewritten = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rewritten).unwrap();
    assert_eq!(value["titulo"], "1\\text{cm}");
    assert_eq!(value["secciones"][0]["contenido_markdown"], "mide $1 \\mathrm{cm}$");
    assert_eq!(
        value["secciones"][1]["ejercicios"][0]["enunciado_markdown"],
        "1\\text{cm}"
    );
    assert_eq!(
        value["secciones"][1]["ejercicios"][0]["solucion_markdown"],
        "$1 \\mathrm{cm}$"
    );
    assert!(rewritten.starts_with("{\n  \"titulo\""));
}

#[test]
fn invalid_chapter_json_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("capitulo_01.json"), "{\"a\": \"\\q\"}").unwrap();
    fs::write(dir.path().join("capitulo_02.json"), "{\"secciones\": []}").unwrap();

    let reports = repair_chapter_directory(dir.path(), &cm_table(), RepairMode::Write).unwrap();

    assert!(reports[0].outcome.is_failure());
    assert_eq!(reports[1].outcome, RepairOutcome::Unchanged);
    assert_eq!(
        fs::read_to_string(dir.path().join("capitulo_01.json")).unwrap(),
        "{\"a\": \"\\q\"}"
    );
}

#[test]
fn imports_text_dump_as_myst() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clase_01_vectores.txt");
    fs::write(&input, "Producto a cdot b\nen textm").unwrap();

    let output = import_text_file(&input, &dir.path().join("docs_limpios")).unwrap();

    assert!(output.ends_with("docs_limpios/clase_01_vectores_ocr.myst"));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "# Clase 01 Vectores\n\nProducto a \\cdot b en \\text{m}"
    );
}
