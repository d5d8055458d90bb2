//! Main application struct and eframe::App implementation

use crate::views::{ChapterView, SidebarView, pick_content_dir};
use eframe::egui;
use guide_gui::settings::{Settings, load_settings, save_settings};
use guide_gui::state::AppState;
use guide_gui::theme::{self, SIDEBAR_WIDTH, spacing};

/// Main application struct
pub struct GuideApp {
    state: AppState,
}

impl GuideApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings: Settings = load_settings();
        tracing::info!(
            dark_mode = settings.dark_mode,
            content_dir = %settings.content_dir.display(),
            "settings loaded"
        );
        theme::apply(&cc.egui_ctx, settings.dark_mode);

        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::SidePanel::left("navigation")
            .resizable(true)
            .default_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| SidebarView::show(ui, &mut self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(spacing::SM);
            ChapterView::show(ui, &mut self.state);
        });

        if self.state.take_settings_dirty() {
            theme::apply(ctx, self.state.settings.dark_mode);
            if let Err(e) = save_settings(&self.state.settings) {
                tracing::error!(error = %e, "failed to save settings");
            }
        }
    }
}

impl GuideApp {
    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (open, previous_tab, next_tab, previous_chapter, next_chapter) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (
                cmd && i.key_pressed(egui::Key::O),
                !cmd && i.key_pressed(egui::Key::ArrowLeft),
                !cmd && i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowUp) && i.modifiers.alt,
                i.key_pressed(egui::Key::ArrowDown) && i.modifiers.alt,
            )
        });
        // Text fields keep their own arrow handling.
        if ctx.wants_keyboard_input() {
            return;
        }
        if open {
            pick_content_dir(&mut self.state);
        }
        if previous_tab {
            self.state.cycle_tab(false);
        }
        if next_tab {
            self.state.cycle_tab(true);
        }
        if previous_chapter {
            self.state.step_chapter(false);
        }
        if next_chapter {
            self.state.step_chapter(true);
        }
    }
}
