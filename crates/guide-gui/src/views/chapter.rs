//! Central chapter panel: header, tab bar and the active tab.

use guide_gui::state::AppState;
use guide_gui::theme::{colors, spacing};
use egui::{RichText, Ui};
use guide_session::{
    ChapterPage, DiagramView, ExerciseView, ExercisesTab, Page, Tab, TheoryTab,
};

/// Clicks collected while drawing, applied once the page is no longer
/// borrowed.
enum Action {
    Tab(Tab),
    Toggle(usize),
    ExpandAll,
    CollapseAll,
}

pub struct ChapterView;

impl ChapterView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let mut actions = Vec::new();
        let tab = state.navigation().tab();
        match state.page() {
            Page::Error {
                message, guidance, ..
            } => show_error(ui, message, guidance),
            Page::Chapter(page) => show_chapter(ui, page, tab, &mut actions),
        }
        for action in actions {
            match action {
                Action::Tab(tab) => state.select_tab(tab),
                Action::Toggle(index) => state.toggle_exercise(index),
                Action::ExpandAll => state.expand_all(),
                Action::CollapseAll => state.collapse_all(),
            }
        }
    }
}

fn show_error(ui: &mut Ui, message: &str, guidance: &str) {
    ui.add_space(spacing::LG);
    ui.label(
        RichText::new(format!("{} {message}", egui_phosphor::regular::WARNING_CIRCLE))
            .color(ui.visuals().error_fg_color)
            .strong(),
    );
    ui.add_space(spacing::SM);
    ui.label(RichText::new(guidance).weak());
}

fn show_chapter(ui: &mut Ui, page: &ChapterPage, tab: Tab, actions: &mut Vec<Action>) {
    ui.heading(RichText::new(&page.title).size(26.0));
    ui.label(RichText::new(&page.part_label).weak());
    for warning in &page.warnings {
        ui.label(
            RichText::new(format!("{} {warning}", egui_phosphor::regular::WARNING))
                .color(ui.visuals().warn_fg_color),
        );
    }
    ui.add_space(spacing::SM);

    ui.horizontal(|ui| {
        for candidate in Tab::all() {
            let icon = match candidate {
                Tab::Theory => egui_phosphor::regular::BOOK_OPEN,
                Tab::Exercises => egui_phosphor::regular::PENCIL_SIMPLE,
            };
            let label = format!("{icon} {}", candidate.label());
            if ui.selectable_label(*candidate == tab, label).clicked() && *candidate != tab {
                actions.push(Action::Tab(*candidate));
            }
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| match tab {
            Tab::Theory => show_theory(ui, &page.theory),
            Tab::Exercises => show_exercises(ui, page, actions),
        });
}

fn show_theory(ui: &mut Ui, theory: &TheoryTab) {
    match theory {
        TheoryTab::Content {
            title,
            body,
            diagram,
        } => {
            ui.label(RichText::new(title).heading());
            ui.add_space(spacing::SM);
            ui.label(body);
            if let Some(diagram) = diagram {
                ui.add_space(spacing::MD);
                show_diagram(ui, diagram);
            }
        }
        TheoryTab::Missing { warning } => {
            ui.label(RichText::new(warning).color(ui.visuals().warn_fg_color));
        }
    }
}

fn show_diagram(ui: &mut Ui, diagram: &DiagramView) {
    ui.label(RichText::new("Diagrama Clave del Concepto").strong());
    match diagram {
        DiagramView::Image { url, caption } => {
            ui.add(egui::Image::from_uri(url).max_width(640.0));
            ui.label(RichText::new(caption).weak().small());
        }
        DiagramView::Placeholder { warning, prompt } => {
            egui::Frame::new()
                .fill(colors::PLACEHOLDER_FILL)
                .inner_margin(spacing::SM)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{} {warning}", egui_phosphor::regular::IMAGE))
                            .color(ui.visuals().warn_fg_color),
                    );
                    ui.add_space(spacing::XS);
                    ui.label(RichText::new(prompt).monospace().small());
                });
        }
    }
}

fn show_exercises(ui: &mut Ui, page: &ChapterPage, actions: &mut Vec<Action>) {
    let items = match &page.exercises {
        ExercisesTab::Items { title, items } => {
            ui.label(RichText::new(title).heading());
            items
        }
        ExercisesTab::Empty { info } => {
            ui.label(RichText::new(info).weak());
            return;
        }
    };
    ui.horizontal(|ui| {
        if ui
            .small_button(format!("{} Expandir todo", egui_phosphor::regular::CARET_DOUBLE_DOWN))
            .clicked()
        {
            actions.push(Action::ExpandAll);
        }
        if ui
            .small_button(format!("{} Contraer todo", egui_phosphor::regular::CARET_DOUBLE_UP))
            .clicked()
        {
            actions.push(Action::CollapseAll);
        }
    });
    ui.add_space(spacing::SM);
    for item in items {
        show_exercise(ui, page, item, actions);
    }
}

fn show_exercise(ui: &mut Ui, page: &ChapterPage, item: &ExerciseView, actions: &mut Vec<Action>) {
    let header = format!("Problema {}: {}", item.number, item.heading);
    let response = egui::CollapsingHeader::new(header)
        .id_salt(("exercise", page.chapter, item.number))
        .open(Some(item.expanded))
        .show(ui, |ui| {
            ui.label(RichText::new("Enunciado").strong());
            ui.label(&item.statement);
            ui.add_space(spacing::SM);
            ui.label(
                RichText::new("Solución Detallada")
                    .strong()
                    .color(colors::SOLUTION),
            );
            ui.label(&item.solution);
        });
    if response.header_response.clicked() {
        actions.push(Action::Toggle(item.number - 1));
    }
}
