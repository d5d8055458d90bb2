//! MyST rendering of chapters and of the guide index.

use std::fmt::Write as _;

use guide_model::{Catalog, Chapter, Diagram, Section};
use guide_repair::replace_unescaped;

pub const INDEX_TITLE: &str = "Guía Completa de Física y Matemáticas";
pub const INDEX_INTRO: &str =
    "Esta es una guía completa de conceptos y ejercicios resueltos de Física.";

const DEFAULT_PART: &str = "General";
const DEFAULT_DATE: &str = "Desconocida";
const SOLUTION_INDENT: &str = "   ";

/// LaTeX commands starting with `n` that must survive the `\n` expansion.
const N_COMMANDS: &[&str] = &["nabla", "neq", "newline", "ne", "ni", "not", "nu"];

/// Renders one chapter as a MyST document.
pub fn chapter_document(chapter: &Chapter, catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "({})=", chapter.id.myst_label());
    let _ = writeln!(out, "# {}", chapter.title);
    out.push('\n');
    let _ = writeln!(out, "*Parte: {}*", or_default(&chapter.part, DEFAULT_PART));
    let _ = writeln!(
        out,
        "*Fecha: {}*",
        or_default(&chapter.generation_date, DEFAULT_DATE)
    );
    out.push('\n');

    let mut diagram = catalog.diagram(chapter.id);
    for section in &chapter.sections {
        if matches!(section, Section::Unknown) {
            continue;
        }
        let _ = writeln!(out, "## {}", section.title());
        out.push('\n');
        match section {
            Section::Theory(theory) => {
                let _ = writeln!(out, "{}", clean_markdown(&theory.body));
                out.push('\n');
                if let Some(diagram) = diagram.take() {
                    write_diagram(&mut out, diagram);
                }
            }
            Section::Exercises(exercises) => {
                for (index, exercise) in exercises.items.iter().enumerate() {
                    let heading = exercise.statement.lines().next().unwrap_or_default();
                    let _ = writeln!(out, "### Problema {}: {heading}", index + 1);
                    out.push('\n');
                    let _ = writeln!(out, "{}", clean_markdown(&exercise.statement));
                    out.push('\n');
                    let _ = writeln!(out, ".. dropdown:: Mostrar Solución");
                    out.push('\n');
                    for line in clean_markdown(&exercise.solution).split('\n') {
                        let _ = writeln!(out, "{SOLUTION_INDENT}{line}");
                    }
                    out.push('\n');
                }
            }
            Section::Unknown => {}
        }
    }
    out
}

fn write_diagram(out: &mut String, diagram: &Diagram) {
    let _ = writeln!(out, "### Diagrama Clave del Concepto");
    out.push('\n');
    match diagram.url.as_deref().filter(|_| diagram.is_provisioned()) {
        Some(url) => {
            let _ = writeln!(out, "```{{figure}} {url}");
            let _ = writeln!(out, "{}", diagram.prompt);
            let _ = writeln!(out, "```");
        }
        None => {
            let _ = writeln!(out, "```{{warning}}");
            let _ = writeln!(
                out,
                "Diagrama Faltante: Integre esta imagen para mejor visualización."
            );
            let _ = writeln!(out, "```");
            out.push('\n');
            let _ = writeln!(out, "```text");
            let _ = writeln!(out, "Prompt para generación de IA: {}", diagram.prompt);
            let _ = writeln!(out, "```");
        }
    }
    out.push('\n');
}

/// Renders the top-level index with a toctree over `entries` (document
/// names without extension, in the order given).
pub fn index_document<S: AsRef<str>>(entries: &[S]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {INDEX_TITLE}");
    out.push('\n');
    let _ = writeln!(out, "{INDEX_INTRO}");
    out.push('\n');
    let _ = writeln!(out, ".. toctree::");
    let _ = writeln!(out, "   :maxdepth: 2");
    let _ = writeln!(out, "   :caption: Capítulos");
    out.push('\n');
    for entry in entries {
        let _ = writeln!(out, "   {}", entry.as_ref());
    }
    out
}

/// Final cleanup of authored markdown before export.
///
/// Expands escaped `\n` sequences, fixes bare `textm` / `textcm` units,
/// collapses `$$$$` and pads `\cdot` with spaces.
pub fn clean_markdown(text: &str) -> String {
    let mut content = expand_escaped_newlines(text);
    content = replace_unescaped(&content, "textm", "\\text{m}");
    content = replace_unescaped(&content, "textcm", "\\text{cm}");
    content = content.replace("$$$$", "$$");
    content = content.replace("\\cdot", " \\cdot ");
    content.trim().to_string()
}

fn expand_escaped_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(index) = rest.find("\\n") {
        out.push_str(&rest[..index]);
        let after = &rest[index + 1..];
        if starts_with_command(after) {
            out.push('\\');
        } else {
            out.push('\n');
            rest = &after[1..];
            continue;
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

fn starts_with_command(text: &str) -> bool {
    N_COMMANDS.iter().any(|command| {
        text.strip_prefix(command)
            .is_some_and(|tail| !tail.starts_with(|c: char| c.is_ascii_alphabetic()))
    })
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
