//! Toolbar: Tools, Geräte-Shortcuts, Orientierung und Zoom.

use crate::app::{AppIntent, AppState};
use crate::core::toolbar_frames;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.tools.current_id();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Tool:");
            for (id, name) in state.tools.tool_entries() {
                if ui.add(egui::Button::new(name).selected(active == id)).clicked() {
                    events.push(AppIntent::ToolSelected { id });
                }
            }

            ui.separator();

            let current = state.screen.config();
            for (index, frame) in toolbar_frames() {
                let button = egui::Button::new(egui::RichText::new(frame.two_line_label()).small())
                    .selected(current.same_size(frame.width, frame.height));
                if ui.add(button).on_hover_text(frame.display_label()).clicked() {
                    events.push(AppIntent::FrameSelected { index });
                }
            }

            ui.separator();

            let orientation = state.screen.orientation();
            if ui
                .button(format!("⟳ {}", orientation.label()))
                .on_hover_text("Orientierung wechseln")
                .clicked()
            {
                events.push(AppIntent::OrientationSelected {
                    orientation: orientation.toggled(),
                });
            }

            ui.separator();

            let mut zoom = state.view.zoom_level;
            let slider = egui::Slider::new(&mut zoom, state.options.zoom_min..=state.options.zoom_max)
                .logarithmic(true)
                .show_value(false);
            if ui.add(slider).changed() {
                events.push(AppIntent::ZoomChanged { level: zoom });
            }
            if ui.button("1:1").clicked() {
                events.push(AppIntent::ResetZoomRequested);
            }
        });
    });

    events
}
