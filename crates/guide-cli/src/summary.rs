//! Terminal tables for command results.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use guide_model::{IssueSeverity, ValidationReport};
use guide_repair::{DirectoryReport, DirectoryStatus, FileReport, RepairOutcome};
use guide_report::ExportSummary;
use guide_validate::FileCheck;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn print_check_results(results: &[(PathBuf, FileCheck)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Line"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (path, check) in results {
        let (status, error) = match check {
            FileCheck::Valid => (Cell::new("VALID").fg(Color::Green), None),
            FileCheck::Cleaned { error, removed } => (
                Cell::new(format!("CLEANED ({removed})")).fg(Color::Yellow),
                Some(error),
            ),
            FileCheck::Invalid {
                error,
                after_cleanup,
            } => (
                Cell::new("INVALID")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Some(after_cleanup.as_ref().unwrap_or(error)),
            ),
            FileCheck::Missing => (Cell::new("MISSING").fg(Color::Red), None),
        };
        let row = match error {
            Some(error) => vec![
                Cell::new(path.display()),
                status,
                Cell::new(error.position.line),
                Cell::new(error.position.column),
                Cell::new(&error.message),
            ],
            None => vec![
                Cell::new(path.display()),
                status,
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");

    for (path, check) in results {
        if let FileCheck::Invalid { error, .. } = check {
            eprintln!();
            eprintln!("{}:{}:{}", path.display(), error.position.line, error.position.column);
            eprintln!("  {}", error.line_text);
            eprintln!("  {}", error.caret());
        }
    }
}

pub fn print_validation_reports(reports: &[ValidationReport], unreadable: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chapter"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(report.chapter)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(report.error_count(), Color::Red),
            count_cell(report.warning_count(), Color::Yellow),
        ]);
    }
    println!("{table}");

    let issues: Vec<_> = reports
        .iter()
        .flat_map(|report| report.issues.iter().map(move |issue| (report.chapter, issue)))
        .collect();
    if !issues.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Chapter"),
            header_cell("Severity"),
            header_cell("Code"),
            header_cell("Exercise"),
            header_cell("Message"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Center);
        align_column(&mut table, 3, CellAlignment::Right);
        for (chapter, issue) in issues {
            table.add_row(vec![
                Cell::new(chapter),
                severity_cell(issue.severity),
                Cell::new(&issue.code),
                issue.exercise.map_or_else(|| dim_cell("-"), Cell::new),
                Cell::new(&issue.message),
            ]);
        }
        println!();
        println!("Issues:");
        println!("{table}");
    }

    if !unreadable.is_empty() {
        eprintln!("Unreadable chapters:");
        for message in unreadable {
            eprintln!("- {message}");
        }
    }
}

pub fn print_repair_directories(reports: &[DirectoryReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Directory"),
        header_cell("Status"),
        header_cell("Corrected"),
        header_cell("Unchanged"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    for column in 2..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for report in reports {
        let (corrected, unchanged, failed) = outcome_counts(&report.files);
        let status = match report.status {
            DirectoryStatus::Processed => Cell::new("processed").fg(Color::Green),
            DirectoryStatus::Missing => Cell::new("missing").fg(Color::Yellow),
            DirectoryStatus::Unreadable => Cell::new("unreadable").fg(Color::Red),
            DirectoryStatus::Empty => dim_cell("empty"),
        };
        table.add_row(vec![
            Cell::new(report.dir.display()),
            status,
            count_cell(corrected, Color::Green),
            Cell::new(unchanged),
            count_cell(failed, Color::Red),
        ]);
    }
    println!("{table}");
    print_file_failures(reports.iter().flat_map(|report| &report.files));
}

pub fn print_repair_files(files: &[FileReport]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Outcome")]);
    apply_table_style(&mut table);
    for file in files {
        table.add_row(vec![Cell::new(file.path.display()), outcome_cell(&file.outcome)]);
    }
    println!("{table}");
    print_file_failures(files);
}

pub fn print_export_summary(summary: &ExportSummary) {
    println!("Index: {}", summary.index.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Document"), header_cell("Status")]);
    apply_table_style(&mut table);
    for path in &summary.written {
        table.add_row(vec![
            Cell::new(path.display()),
            Cell::new("written").fg(Color::Green),
        ]);
    }
    for skipped in &summary.skipped {
        table.add_row(vec![
            Cell::new(skipped.path.display()),
            Cell::new("skipped").fg(Color::Red),
        ]);
    }
    println!("{table}");
    if summary.has_failures() {
        eprintln!("Skipped chapters:");
        for skipped in &summary.skipped {
            eprintln!("- {}: {}", skipped.path.display(), skipped.reason);
        }
    }
}

fn print_file_failures<'a>(files: impl IntoIterator<Item = &'a FileReport>) {
    let failures: Vec<_> = files
        .into_iter()
        .filter_map(|file| match &file.outcome {
            RepairOutcome::Failed { message } => Some((&file.path, message)),
            _ => None,
        })
        .collect();
    if failures.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for (path, message) in failures {
        eprintln!("- {}: {message}", path.display());
    }
}

pub fn outcome_counts(files: &[FileReport]) -> (usize, usize, usize) {
    files
        .iter()
        .fold((0, 0, 0), |(corrected, unchanged, failed), file| match file.outcome {
            RepairOutcome::Corrected { .. } => (corrected + 1, unchanged, failed),
            RepairOutcome::Unchanged => (corrected, unchanged + 1, failed),
            RepairOutcome::Failed { .. } => (corrected, unchanged, failed + 1),
        })
}

fn outcome_cell(outcome: &RepairOutcome) -> Cell {
    match outcome {
        RepairOutcome::Corrected { replacements } => {
            Cell::new(format!("corrected ({replacements})")).fg(Color::Green)
        }
        RepairOutcome::Unchanged => dim_cell("unchanged"),
        RepairOutcome::Failed { .. } => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
        IssueSeverity::Info => dim_cell("INFO"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
