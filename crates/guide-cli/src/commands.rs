//! Command implementations. Each returns the number of failed items.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Table};
use guide_ingest::{ChapterRepository, ChapterSource, list_chapter_files};
use guide_model::{Catalog, ChapterId};
use guide_repair::{
    RepairMode, ReplacementTable, import_text_file, repair_chapter_directory, repair_directories,
};
use guide_report::export_directory;
use guide_session::{NavigationState, render};
use guide_validate::{check_file, validate_chapter};
use tracing::{info, info_span};

use crate::cli::{
    CheckArgs, ExportArgs, ImportTextArgs, RepairJsonArgs, RepairMystArgs, ShowArgs, ValidateArgs,
};
use crate::config::GuideConfig;
use crate::summary::{
    apply_table_style, header_cell, outcome_counts, print_check_results, print_export_summary,
    print_repair_directories, print_repair_files, print_validation_reports,
};

pub fn run_parts(catalog: &Catalog) -> Result<usize> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Slug"),
        header_cell("Part"),
        header_cell("Chapters"),
    ]);
    apply_table_style(&mut table);
    for (index, part) in catalog.parts().iter().enumerate() {
        let chapters = match (part.chapters.first(), part.chapters.last()) {
            (Some(first), Some(last)) => format!("{first}-{last}"),
            _ => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&part.slug),
            Cell::new(part.decorated_label()),
            Cell::new(chapters),
        ]);
    }
    println!("{table}");
    Ok(0)
}

/// Selects the chapter the way the viewer would and prints the page.
///
/// Returns 1 when the chapter could not be loaded; the error page is still
/// printed.
pub fn run_show(args: &ShowArgs, config: &GuideConfig, catalog: &Catalog) -> Result<usize> {
    let span = info_span!("show", chapter = %args.chapter);
    let _guard = span.enter();

    let state = navigate(args, catalog)?;
    let repository = ChapterRepository::new(&config.content_dir, catalog);
    let state = expand(state, args, &repository);
    let page = render(&state, catalog, &repository);

    if args.json {
        let json = serde_json::to_string_pretty(&page).context("serialize page")?;
        println!("{json}");
    } else {
        print!("{}", page.to_text(state.tab()));
    }
    Ok(usize::from(page.is_error()))
}

fn navigate(args: &ShowArgs, catalog: &Catalog) -> Result<NavigationState> {
    let mut state = NavigationState::new(catalog);
    match &args.part {
        Some(selector) => state.select_part(catalog, selector)?,
        None => {
            let Some(index) = catalog.part_of(args.chapter) else {
                bail!("chapter {} is not part of the guide", args.chapter);
            };
            state.select_part_index(catalog, index)?;
        }
    }
    state.select_chapter(catalog, args.chapter)?;
    state.select_tab(args.tab.into());
    Ok(state)
}

fn expand(
    mut state: NavigationState,
    args: &ShowArgs,
    source: &dyn ChapterSource,
) -> NavigationState {
    if args.expand_all {
        let count = source
            .load(state.chapter())
            .map(|record| record.chapter.exercise_count())
            .unwrap_or(0);
        state.expand_all(count);
    }
    for &number in &args.expand {
        if number > 0 && !state.is_expanded(number - 1) {
            state.toggle_exercise(number - 1);
        }
    }
    state
}

pub fn run_check(args: &CheckArgs, config: &GuideConfig) -> Result<usize> {
    let span = info_span!("check", cleanup = args.cleanup);
    let _guard = span.enter();

    let files = if args.files.is_empty() {
        list_chapter_files(&config.content_dir)
            .with_context(|| format!("list chapters in {}", config.content_dir.display()))?
    } else {
        args.files.clone()
    };
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let check = check_file(&path, args.cleanup)?;
        results.push((path, check));
    }
    print_check_results(&results);
    Ok(results.iter().filter(|(_, check)| !check.is_ok()).count())
}

pub fn run_validate(args: &ValidateArgs, config: &GuideConfig, catalog: &Catalog) -> Result<usize> {
    let span = info_span!("validate");
    let _guard = span.enter();

    let chapters: Vec<ChapterId> = if args.chapters.is_empty() {
        catalog.chapter_ids().collect()
    } else {
        args.chapters.clone()
    };
    let repository = ChapterRepository::new(&config.content_dir, catalog);
    let mut reports = Vec::new();
    let mut unreadable = Vec::new();
    for chapter in chapters {
        match repository.load(chapter) {
            Ok(record) => reports.push(validate_chapter(&record.chapter, catalog)),
            Err(error) => unreadable.push(error.to_string()),
        }
    }
    print_validation_reports(&reports, &unreadable);
    let failed = reports.iter().filter(|report| report.has_errors()).count();
    Ok(failed + unreadable.len())
}

pub fn run_repair_myst(args: &RepairMystArgs, config: &GuideConfig) -> Result<usize> {
    let table = replacement_table(args.rules.as_ref(), config)?;
    let dirs = if args.dirs.is_empty() {
        config.repair_dirs.clone()
    } else {
        args.dirs.clone()
    };
    let reports = repair_directories(&dirs, &config.myst_extension, &table, mode(args.dry_run));
    print_repair_directories(&reports);
    Ok(reports
        .iter()
        .map(|report| outcome_counts(&report.files).2)
        .sum())
}

pub fn run_repair_json(args: &RepairJsonArgs, config: &GuideConfig) -> Result<usize> {
    let table = replacement_table(args.rules.as_ref(), config)?;
    let files = repair_chapter_directory(&config.content_dir, &table, mode(args.dry_run))
        .with_context(|| format!("repair chapters in {}", config.content_dir.display()))?;
    print_repair_files(&files);
    Ok(outcome_counts(&files).2)
}

pub fn run_import_text(args: &ImportTextArgs) -> Result<usize> {
    let output = import_text_file(&args.input, &args.output_dir)
        .with_context(|| format!("import {}", args.input.display()))?;
    println!("Written: {}", output.display());
    Ok(0)
}

pub fn run_export(args: &ExportArgs, config: &GuideConfig, catalog: &Catalog) -> Result<usize> {
    let output = args.output_dir.as_ref().unwrap_or(&config.docs_dir);
    let summary = export_directory(&config.content_dir, output, catalog, &config.myst_extension)
        .with_context(|| format!("export {}", config.content_dir.display()))?;
    print_export_summary(&summary);
    info!(written = summary.written.len(), skipped = summary.skipped.len(), "export finished");
    Ok(summary.skipped.len())
}

/// Process exit status for a command result: 0 only when nothing failed.
pub fn exit_code(result: &Result<usize>) -> i32 {
    match result {
        Ok(0) => 0,
        Ok(_) | Err(_) => 1,
    }
}

/// `--rules` wins over the configured table; the built-in table is the
/// fallback.
fn replacement_table(rules: Option<&PathBuf>, config: &GuideConfig) -> Result<ReplacementTable> {
    match rules.or(config.rules.as_ref()) {
        Some(path) => ReplacementTable::load(path)
            .with_context(|| format!("load replacement table {}", path.display())),
        None => Ok(ReplacementTable::builtin()),
    }
}

fn mode(dry_run: bool) -> RepairMode {
    if dry_run {
        RepairMode::DryRun
    } else {
        RepairMode::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TabArg;

    fn show_args(chapter: u32, part: Option<&str>) -> ShowArgs {
        ShowArgs {
            chapter: ChapterId::new(chapter),
            part: part.map(str::to_string),
            tab: TabArg::Exercises,
            expand_all: false,
            expand: vec![2],
            json: false,
        }
    }

    #[test]
    fn navigation_follows_the_chapter_part() {
        let catalog = Catalog::serway_volume_one();
        let state = navigate(&show_args(20, None), &catalog).unwrap();
        assert_eq!(state.part(&catalog).slug, "thermodynamics");
        assert_eq!(state.chapter(), ChapterId::new(20));
    }

    #[test]
    fn chapter_outside_the_selected_part_is_an_error() {
        let catalog = Catalog::serway_volume_one();
        assert!(navigate(&show_args(20, Some("waves")), &catalog).is_err());
        assert!(navigate(&show_args(30, None), &catalog).is_err());
    }

    #[test]
    fn expand_uses_one_based_numbers() {
        let catalog = Catalog::serway_volume_one();
        let state = navigate(&show_args(5, None), &catalog).unwrap();
        let source = guide_ingest::MemorySource::new();
        let state = expand(state, &show_args(5, None), &source);
        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn explicit_rules_win_over_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "[[rule]]\nbroken = \"a\"\nfixed = \"b\"\n").unwrap();
        let config = GuideConfig::default();
        assert_eq!(replacement_table(Some(&path), &config).unwrap().len(), 1);
        assert_eq!(
            replacement_table(None, &config).unwrap().len(),
            ReplacementTable::builtin().len()
        );
    }
}
