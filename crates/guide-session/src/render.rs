//! Projection of the navigation state onto a displayable page.
//!
//! [`render`] never performs mutation and never fails: load errors become
//! [`Page::Error`], layout problems become tab-level fallbacks.

use std::fmt::Write as _;

use guide_ingest::{ChapterSource, LoadError};
use guide_model::{Catalog, ChapterId, Diagram};
use serde::Serialize;
use tracing::{debug, warn};

use crate::state::{NavigationState, Tab};

/// Shown under every load error.
pub const LATEX_GUIDANCE: &str = "El archivo JSON del capítulo contiene un error de sintaxis. \
Por favor, asegúrese de que todas las ecuaciones de LaTeX estén delimitadas por `$$` \
y que las barras invertidas sean dobles (`\\\\`).";

pub const THEORY_MISSING: &str = "Contenido de teoría no estructurado correctamente en el JSON.";
pub const EXERCISES_MISSING: &str = "Este capítulo no contiene ejercicios resueltos.";
pub const DIAGRAM_MISSING: &str = "Diagrama Faltante: Integre esta imagen para mejor visualización.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Error {
        chapter: ChapterId,
        message: String,
        guidance: String,
    },
    Chapter(ChapterPage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterPage {
    pub chapter: ChapterId,
    pub title: String,
    /// Part label without its icon.
    pub part_label: String,
    pub theory: TheoryTab,
    pub exercises: ExercisesTab,
    /// Structural problems detected at load time.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TheoryTab {
    Content {
        title: String,
        body: String,
        diagram: Option<DiagramView>,
    },
    Missing {
        warning: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagramView {
    Image { url: String, caption: String },
    Placeholder { warning: String, prompt: String },
}

impl DiagramView {
    pub fn from_diagram(diagram: &Diagram) -> Self {
        match diagram.url.as_deref().filter(|_| diagram.is_provisioned()) {
            Some(url) => Self::Image {
                url: url.to_string(),
                caption: diagram.prompt.clone(),
            },
            None => Self::Placeholder {
                warning: DIAGRAM_MISSING.to_string(),
                prompt: format!("Prompt para generación de IA: {}", diagram.prompt),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExercisesTab {
    Items {
        title: String,
        items: Vec<ExerciseView>,
    },
    Empty {
        info: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseView {
    /// 1-based exercise number.
    pub number: usize,
    /// First line of the statement, used as the collapsed header.
    pub heading: String,
    pub statement: String,
    pub solution: String,
    pub expanded: bool,
}

/// Renders the page for the current navigation state.
pub fn render(state: &NavigationState, catalog: &Catalog, source: &dyn ChapterSource) -> Page {
    let chapter = state.chapter();
    let record = match source.load(chapter) {
        Ok(record) => record,
        Err(error) => {
            warn!(chapter = %chapter, kind = ?error.kind(), "chapter could not be rendered");
            return Page::Error {
                chapter,
                message: error_message(&error),
                guidance: LATEX_GUIDANCE.to_string(),
            };
        }
    };
    debug!(chapter = %chapter, tab = ?state.tab(), "rendering chapter");

    let content = &record.chapter;
    let theory = match content.theory() {
        Some(theory) => TheoryTab::Content {
            title: theory.title.clone(),
            body: theory.body.clone(),
            diagram: catalog.diagram(chapter).map(DiagramView::from_diagram),
        },
        None => TheoryTab::Missing {
            warning: THEORY_MISSING.to_string(),
        },
    };
    let exercises = match content.exercises() {
        Some(section) => ExercisesTab::Items {
            title: section.title.clone(),
            items: section
                .items
                .iter()
                .enumerate()
                .map(|(index, exercise)| ExerciseView {
                    number: index + 1,
                    heading: first_line(&exercise.statement).to_string(),
                    statement: exercise.statement.clone(),
                    solution: exercise.solution.clone(),
                    expanded: state.is_expanded(index),
                })
                .collect(),
        },
        None => ExercisesTab::Empty {
            info: EXERCISES_MISSING.to_string(),
        },
    };

    Page::Chapter(ChapterPage {
        chapter,
        title: content.title.clone(),
        part_label: state.part(catalog).label.clone(),
        theory,
        exercises,
        warnings: record
            .structure_issues
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

fn error_message(error: &LoadError) -> String {
    match error {
        LoadError::NotFound { path, .. } => {
            format!("Archivo no encontrado: {}", path.display())
        }
        LoadError::MalformedContent {
            chapter,
            offset,
            line,
            column,
            message,
        } => format!(
            "Error de formato JSON en el Capítulo {chapter} (Posición: {offset}, línea {line}, columna {column}): {message}. \
Revise cuidadosamente las barras invertidas ('\\\\' para LaTeX)."
        ),
        LoadError::Unknown { chapter, message } => {
            format!("Error desconocido al cargar el capítulo {chapter}: {message}")
        }
    }
}

fn first_line(text: &str) -> &str {
    text.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("")
}

impl Page {
    pub fn chapter(&self) -> ChapterId {
        match self {
            Self::Error { chapter, .. } => *chapter,
            Self::Chapter(page) => page.chapter,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Plain-text rendering of one tab, as printed by the command line.
    ///
    /// Solutions of collapsed exercises are left out.
    pub fn to_text(&self, tab: Tab) -> String {
        let mut out = String::new();
        match self {
            Self::Error {
                message, guidance, ..
            } => {
                let _ = writeln!(out, "ERROR: {message}");
                let _ = writeln!(out, "{guidance}");
            }
            Self::Chapter(page) => page.write_text(&mut out, tab),
        }
        out
    }
}

impl ChapterPage {
    fn write_text(&self, out: &mut String, tab: Tab) {
        let _ = writeln!(out, "# {}", self.title);
        let _ = writeln!(out, "## {}", self.part_label);
        for warning in &self.warnings {
            let _ = writeln!(out, "! {warning}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}]", tab.label());
        let _ = writeln!(out);
        match tab {
            Tab::Theory => write_theory(out, &self.theory),
            Tab::Exercises => write_exercises(out, &self.exercises),
        }
    }
}

fn write_theory(out: &mut String, theory: &TheoryTab) {
    match theory {
        TheoryTab::Content {
            title,
            body,
            diagram,
        } => {
            let _ = writeln!(out, "### {title}");
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", body.trim_end());
            match diagram {
                Some(DiagramView::Image { url, caption }) => {
                    let _ = writeln!(out);
                    let _ = writeln!(out, "[imagen: {url}] {caption}");
                }
                Some(DiagramView::Placeholder { warning, prompt }) => {
                    let _ = writeln!(out);
                    let _ = writeln!(out, "! {warning}");
                    let _ = writeln!(out, "{prompt}");
                }
                None => {}
            }
        }
        TheoryTab::Missing { warning } => {
            let _ = writeln!(out, "! {warning}");
        }
    }
}

fn write_exercises(out: &mut String, exercises: &ExercisesTab) {
    match exercises {
        ExercisesTab::Items { title, items } => {
            let _ = writeln!(out, "### {title}");
            for item in items {
                let marker = if item.expanded { "-" } else { "+" };
                let _ = writeln!(out);
                let _ = writeln!(out, "[{marker}] Problema {}: {}", item.number, item.heading);
                if item.expanded {
                    let _ = writeln!(out, "{}", item.statement.trim_end());
                    let _ = writeln!(out);
                    let _ = writeln!(out, "Solución Detallada:");
                    let _ = writeln!(out, "{}", item.solution.trim_end());
                }
            }
        }
        ExercisesTab::Empty { info } => {
            let _ = writeln!(out, "{info}");
        }
    }
}
