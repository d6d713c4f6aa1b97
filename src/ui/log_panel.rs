//! Log-Panel: Tabelle der In-App-Protokollzeilen.

use crate::app::AppState;

/// Rendert das Log-Panel, sofern eingeblendet.
pub fn render_log_panel(ctx: &egui::Context, state: &AppState) {
    if !state.ui.show_log_panel {
        return;
    }

    egui::TopBottomPanel::bottom("log_panel")
        .resizable(true)
        .default_height(140.0)
        .show(ctx, |ui| {
            let columns = state.ui.log.column_count() + 1;
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("log_table")
                        .num_columns(columns)
                        .striped(true)
                        .show(ui, |ui| {
                            for row in state.ui.log.rows() {
                                ui.label(egui::RichText::new(&row.timestamp).monospace());
                                for field in &row.fields {
                                    ui.label(field.as_str());
                                }
                                ui.end_row();
                            }
                        });
                });
        });
}
