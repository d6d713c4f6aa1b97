//! Properties-Panel (rechte Seitenleiste) für das selektierte Element.

use crate::app::{AppIntent, AppState, DocumentView};
use crate::core::element::describe;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(
    ctx: &egui::Context,
    state: &AppState,
    document: Option<DocumentView<'_>>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(160.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let selected = document.and_then(|view| {
                let element = state.selection.current_in(Some(view.document))?;
                let node = view.tree.get(element.element)?;
                Some((view, element.element, node))
            });

            match selected {
                Some((view, element, node)) => {
                    egui::Grid::new("selected_element")
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.label("Element:");
                            ui.label(describe(node));
                            ui.end_row();
                            ui.label("Kinder:");
                            ui.label(node.children.len().to_string());
                            ui.end_row();
                        });
                    ui.label(egui::RichText::new(view.tree.path(element)).small().weak());

                    if ui.button("Selektion aufheben").clicked() {
                        events.push(AppIntent::UnselectRequested);
                    }
                }
                None => {
                    ui.label("Keine Selektion");
                }
            }

            if let Some(summary) = state.tools.current_tool().inspection() {
                ui.separator();
                ui.label(egui::RichText::new("Inspektion").strong());
                ui.label(summary.headline());
                if !summary.classes.is_empty() {
                    ui.label(format!("Klassen: {}", summary.classes.join(" ")));
                }
                ui.label(format!("Kinder: {}", summary.child_count));
                ui.label(egui::RichText::new(&summary.path).small().weak());
            }

            ui.separator();
            ui.label(egui::RichText::new(state.tools.current_tool().description()).small());
        });

    events
}
