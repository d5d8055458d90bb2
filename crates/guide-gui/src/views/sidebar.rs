//! Sidebar: part selection, chapter list and content directory.

use guide_gui::state::AppState;
use guide_gui::theme::spacing;
use egui::{RichText, Ui};

pub struct SidebarView;

impl SidebarView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        ui.add_space(spacing::SM);
        ui.heading(format!("{} Guía de Física", egui_phosphor::regular::ATOM));
        ui.label(RichText::new("Serway & Jewett, Vol. 1").weak());
        ui.add_space(spacing::MD);

        let mut part_selected = state.navigation().part_index();
        let current_label = state
            .navigation()
            .part(state.catalog())
            .decorated_label();
        ui.label(RichText::new("Parte").strong());
        egui::ComboBox::from_id_salt("part_selector")
            .selected_text(current_label)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for (index, part) in state.catalog().parts().iter().enumerate() {
                    ui.selectable_value(&mut part_selected, index, part.decorated_label());
                }
            });
        if part_selected != state.navigation().part_index() {
            state.select_part(part_selected);
        }

        ui.add_space(spacing::MD);
        ui.label(RichText::new("Capítulo").strong());
        let mut chapter_selected = state.navigation().chapter();
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 120.0).max(120.0))
            .show(ui, |ui| {
                let part = state.navigation().part(state.catalog());
                for &chapter in &part.chapters {
                    ui.radio_value(
                        &mut chapter_selected,
                        chapter,
                        state.catalog().chapter_title(chapter),
                    );
                }
            });
        if chapter_selected != state.navigation().chapter() {
            state.select_chapter(chapter_selected);
        }

        ui.add_space(spacing::MD);
        ui.separator();
        ui.label(RichText::new("Contenido").strong());
        ui.label(
            RichText::new(state.settings.content_dir.display().to_string())
                .weak()
                .small(),
        );
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Cambiar carpeta", egui_phosphor::regular::FOLDER_OPEN))
                .clicked()
            {
                pick_content_dir(state);
            }
            if ui
                .button(egui_phosphor::regular::ARROW_CLOCKWISE)
                .on_hover_text("Recargar")
                .clicked()
            {
                state.reload();
            }
        });

        ui.add_space(spacing::SM);
        let theme_label = if state.settings.dark_mode {
            format!("{} Modo claro", egui_phosphor::regular::SUN)
        } else {
            format!("{} Modo oscuro", egui_phosphor::regular::MOON)
        };
        if ui.button(theme_label).clicked() {
            state.toggle_dark_mode();
        }
    }
}

/// Opens the native folder picker and switches to the chosen directory.
pub fn pick_content_dir(state: &mut AppState) {
    if let Some(folder) = rfd::FileDialog::new()
        .set_directory(&state.settings.content_dir)
        .pick_folder()
    {
        state.set_content_dir(folder);
    }
}
