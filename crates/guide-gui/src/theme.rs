//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Sidebar width in points.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Background of the missing-diagram notice.
    pub const PLACEHOLDER_FILL: Color32 = Color32::from_rgba_premultiplied(234, 179, 8, 24);
    /// Accent for solution headings.
    pub const SOLUTION: Color32 = Color32::from_rgb(34, 197, 94);
}

/// Applies the light or dark visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}
