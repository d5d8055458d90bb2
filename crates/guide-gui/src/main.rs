//! Physics study guide - desktop viewer
//!
//! Browses the per-chapter JSON content by part and chapter, with a theory
//! tab and a tab of collapsible solved exercises.

mod app;
mod views;

use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,guide_gui=info,guide_ingest=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Guía de Estudio de Física")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Physics Guide",
        options,
        Box::new(|cc| Ok(Box::new(app::GuideApp::new(cc)))),
    )
}
