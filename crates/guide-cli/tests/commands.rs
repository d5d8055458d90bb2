//! End-to-end tests for the subcommands over temporary content directories.

use std::fs;
use std::path::Path;

use clap::Parser;
use guide_cli::cli::{Cli, Command};
use guide_cli::commands::{
    exit_code, run_check, run_export, run_repair_myst, run_show, run_validate,
};
use guide_cli::config::GuideConfig;
use guide_model::{Catalog, ChapterId};

fn chapter_json(id: u32, title: &str) -> String {
    format!(
        r#"{{
  "capitulo_id": {id},
  "titulo": "{title}",
  "parte": "Mecánica",
  "fecha_generacion": "2025-10-01",
  "secciones": [
    {{ "tipo": "teoria", "titulo": "Teoría", "contenido_markdown": "$$F = ma$$" }},
    {{ "tipo": "ejercicios", "titulo": "Ejercicios", "ejercicios": [
      {{ "enunciado_markdown": "Un bloque", "solucion_markdown": "$$a = F/m$$" }}
    ] }}
  ]
}}"#
    )
}

fn write_chapter(dir: &Path, id: u32, contents: &str) {
    fs::write(dir.join(ChapterId::new(id).json_file_name()), contents).unwrap();
}

fn config_for(content_dir: &Path) -> GuideConfig {
    GuideConfig {
        content_dir: content_dir.to_path_buf(),
        ..GuideConfig::default()
    }
}

fn command(args: &[&str]) -> Command {
    let argv = std::iter::once("physics-guide").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap().command
}

#[test]
fn show_reports_unloadable_chapters_as_failures() {
    let dir = tempfile::tempdir().unwrap();
    write_chapter(dir.path(), 5, &chapter_json(5, "Capítulo 5: Leyes del movimiento"));
    let config = config_for(dir.path());
    let catalog = Catalog::serway_volume_one();

    let Command::Show(args) = command(&["show", "5", "--tab", "exercises", "--expand-all"]) else {
        panic!("expected show");
    };
    assert_eq!(run_show(&args, &config, &catalog).unwrap(), 0);

    let Command::Show(args) = command(&["show", "7", "--json"]) else {
        panic!("expected show");
    };
    assert_eq!(run_show(&args, &config, &catalog).unwrap(), 1);

    let Command::Show(args) = command(&["show", "20", "--part", "waves"]) else {
        panic!("expected show");
    };
    assert!(run_show(&args, &config, &catalog).is_err());
}

#[test]
fn check_cleanup_repairs_control_characters_only() {
    let dir = tempfile::tempdir().unwrap();
    write_chapter(dir.path(), 1, "{\"titulo\": \"Física\ty medición\", \"capitulo_id\": 1}");
    let config = config_for(dir.path());

    let Command::Check(args) = command(&["check"]) else {
        panic!("expected check");
    };
    assert_eq!(run_check(&args, &config).unwrap(), 1);

    let Command::Check(args) = command(&["check", "--cleanup"]) else {
        panic!("expected check");
    };
    assert_eq!(run_check(&args, &config).unwrap(), 0);
    let cleaned = fs::read_to_string(dir.path().join("capitulo_01.json")).unwrap();
    assert!(!cleaned.contains('\t'));

    write_chapter(dir.path(), 2, "{\"titulo\": \"a\",}");
    let broken = dir.path().join("capitulo_02.json");
    let Command::Check(args) = command(&["check", "--cleanup", broken.to_str().unwrap()]) else {
        panic!("expected check");
    };
    assert_eq!(run_check(&args, &config).unwrap(), 1);
    assert_eq!(fs::read_to_string(&broken).unwrap(), "{\"titulo\": \"a\",}");
}

#[test]
fn validate_counts_errors_and_unreadable_chapters() {
    let dir = tempfile::tempdir().unwrap();
    write_chapter(dir.path(), 5, &chapter_json(5, "Capítulo 5: Leyes del movimiento"));
    let config = config_for(dir.path());
    let catalog = Catalog::serway_volume_one();

    let Command::Validate(args) = command(&["validate", "5"]) else {
        panic!("expected validate");
    };
    assert_eq!(run_validate(&args, &config, &catalog).unwrap(), 0);

    let Command::Validate(args) = command(&["validate", "5", "6"]) else {
        panic!("expected validate");
    };
    assert_eq!(run_validate(&args, &config, &catalog).unwrap(), 1);
}

#[test]
fn repair_myst_dry_run_leaves_documents_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("capitulos_guia");
    fs::create_dir(&docs).unwrap();
    let config = config_for(dir.path());
    let document = docs.join(format!("capitulo_01.{}", config.myst_extension));
    let original = "Una regla de 1\\text{cm} de largo.\n";
    fs::write(&document, original).unwrap();
    let docs_arg = docs.to_str().unwrap();

    let Command::RepairMyst(args) = command(&["repair-myst", docs_arg, "--dry-run"]) else {
        panic!("expected repair-myst");
    };
    assert_eq!(run_repair_myst(&args, &config).unwrap(), 0);
    assert_eq!(fs::read_to_string(&document).unwrap(), original);

    let Command::RepairMyst(args) = command(&["repair-myst", docs_arg]) else {
        panic!("expected repair-myst");
    };
    assert_eq!(run_repair_myst(&args, &config).unwrap(), 0);
    assert_eq!(
        fs::read_to_string(&document).unwrap(),
        "Una regla de $1 \\mathrm{cm}$ de largo.\n"
    );
}

#[test]
fn export_returns_the_number_of_skipped_chapters() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("json_capitulos");
    fs::create_dir(&content).unwrap();
    write_chapter(&content, 1, &chapter_json(1, "Capítulo 1: Física y medición"));
    write_chapter(&content, 2, "{ not json");
    let output = dir.path().join("docs");
    let config = config_for(&content);
    let catalog = Catalog::serway_volume_one();

    let Command::Export(args) = command(&["export", "--output-dir", output.to_str().unwrap()])
    else {
        panic!("expected export");
    };
    assert_eq!(run_export(&args, &config, &catalog).unwrap(), 1);
    assert!(
        output
            .join(format!("capitulo_01.{}", config.myst_extension))
            .is_file()
    );
    assert!(
        !output
            .join(format!("capitulo_02.{}", config.myst_extension))
            .exists()
    );
}

#[test]
fn exit_status_is_zero_only_without_failures() {
    assert_eq!(exit_code(&Ok(0)), 0);
    assert_eq!(exit_code(&Ok(3)), 1);
    assert_eq!(exit_code(&Err(anyhow::anyhow!("content directory missing"))), 1);
}
