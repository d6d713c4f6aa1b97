//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use std::time::Instant;

/// Zoom-Anzeige, z.B. `Zoom: 125%`.
pub fn zoom_label(level: f32) -> String {
    let percent = (level * 1000.0).round() / 10.0;
    format!("Zoom: {}%", percent)
}

/// Zeigerposition, z.B. `Pos: 12x34`.
pub fn pointer_label(position: glam::IVec2) -> String {
    format!("Pos: {}x{}", position.x, position.y)
}

/// Größe der Render-Fläche, z.B. `Screen: 320x480`.
pub fn screen_label((width, height): (u32, u32)) -> String {
    format!("Screen: {}x{}", width, height)
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.session.current() {
                Some(doc) => ui.label(doc.file_name()),
                None => ui.label("No document loaded"),
            };

            ui.separator();
            ui.label(format!("Tool: {}", state.tools.current_tool().name()));

            if let Some(text) = state.ui.status_text(Instant::now()) {
                ui.separator();
                ui.label(egui::RichText::new(text).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(screen_label(state.view.context_size));
                ui.separator();
                ui.label(pointer_label(state.view.mouse_pos));
                ui.separator();
                ui.label(zoom_label(state.view.zoom_level));
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_status_bar_format() {
        assert_eq!(zoom_label(1.0), "Zoom: 100%");
        assert_eq!(zoom_label(1.25), "Zoom: 125%");
        assert_eq!(zoom_label(0.8), "Zoom: 80%");
        assert_eq!(zoom_label(0.125), "Zoom: 12.5%");
        assert_eq!(pointer_label(glam::IVec2::new(12, 34)), "Pos: 12x34");
        assert_eq!(screen_label((320, 480)), "Screen: 320x480");
    }
}
