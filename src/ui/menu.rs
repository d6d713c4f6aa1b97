//! Top-Menü (File, Screen, View, Tools).

use crate::app::{AppIntent, AppState};
use crate::core::{tool_frames, Orientation};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                let has_file = state.session.is_open();
                if ui
                    .add_enabled(has_file, egui::Button::new("Reload (F5)"))
                    .clicked()
                {
                    events.push(AppIntent::ReloadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Screen", |ui| {
                let current = state.screen.config();
                for (index, frame) in tool_frames() {
                    let active = current.same_size(frame.width, frame.height);
                    if ui
                        .add(egui::Button::new(frame.display_label()).selected(active))
                        .clicked()
                    {
                        events.push(AppIntent::FrameSelected { index });
                        ui.close();
                    }
                }

                ui.separator();

                for orientation in [Orientation::Portrait, Orientation::Landscape] {
                    if ui
                        .radio(state.screen.orientation() == orientation, orientation.label())
                        .clicked()
                    {
                        events.push(AppIntent::OrientationSelected { orientation });
                        ui.close();
                    }
                }

                ui.separator();

                let mut follow = state.ui.follow_window_size;
                if ui.checkbox(&mut follow, "Follow window size").changed() {
                    events.push(AppIntent::FollowWindowSizeToggled { enabled: follow });
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In (Ctrl++)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                if ui.button("Zoom Out (Ctrl+-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.button("View 1:1 (Ctrl+0)").clicked() {
                    events.push(AppIntent::ResetZoomRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Toggle Debugger").clicked() {
                    events.push(AppIntent::DebuggerToggled);
                    ui.close();
                }

                let log_label = if state.ui.show_log_panel {
                    "Hide Log (Esc)"
                } else {
                    "Show Log (Esc)"
                };
                if ui.button(log_label).clicked() {
                    events.push(AppIntent::LogPanelToggled);
                    ui.close();
                }
            });

            ui.menu_button("Tools", |ui| {
                let current = state.tools.current_id();
                for (id, name) in state.tools.tool_entries() {
                    if ui.radio(current == id, name).clicked() {
                        events.push(AppIntent::ToolSelected { id });
                        ui.close();
                    }
                }
            });
        });
    });

    events
}
