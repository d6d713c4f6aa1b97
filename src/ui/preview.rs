//! Vorschau-Fläche: Geräte-Rahmen in Zoom-Größe mit klickbaren Elementen.

use crate::app::{AppIntent, AppState, DocumentView};
use crate::core::element::describe;
use crate::core::{ElementId, ElementTree};

const INDENT: f32 = 12.0;
const FRAME_PADDING: f32 = 8.0;

/// Rendert die Vorschau und gibt erzeugte Events zurück.
pub fn render_preview(
    ctx: &egui::Context,
    state: &AppState,
    document: Option<DocumentView<'_>>,
    debugger_visible: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let area = [available.x.max(0.0).floor(), available.y.max(0.0).floor()];
        if area != state.view.preview_size {
            events.push(AppIntent::PreviewAreaResized {
                width: area[0] as u32,
                height: area[1] as u32,
            });
        }

        egui::ScrollArea::both().show(ui, |ui| {
            let zoom = state.view.zoom_level;
            let (width, height) = state.view.context_size;
            let frame_size = egui::vec2(width as f32 * zoom, height as f32 * zoom);
            let (rect, response) = ui.allocate_exact_size(frame_size, egui::Sense::click());

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(96)),
                egui::StrokeKind::Inside,
            );

            if let Some(pos) = response.hover_pos() {
                let local = (pos - rect.min) / zoom.max(f32::EPSILON);
                let position = glam::IVec2::new(local.x as i32, local.y as i32);
                if position != state.view.mouse_pos {
                    events.push(AppIntent::PointerMoved { position });
                }
            }
            if response.clicked() && state.selection.current().is_some() {
                events.push(AppIntent::UnselectRequested);
            }

            let Some(view) = document else {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Open an RML document (Ctrl+O)",
                    egui::FontId::proportional(14.0),
                    egui::Color32::GRAY,
                );
                return;
            };

            let selected = state
                .selection
                .current_in(Some(view.document))
                .map(|element| element.element);
            let inner = rect.shrink(FRAME_PADDING);
            ui.scope_builder(egui::UiBuilder::new().max_rect(inner), |ui| {
                if let Some(root) = view.tree.root() {
                    render_element(ui, view.tree, root, 0, selected, &mut events);
                }
                if debugger_visible {
                    ui.separator();
                    ui.label(egui::RichText::new("Debugger").small().weak());
                }
            });
        });
    });

    events
}

fn render_element(
    ui: &mut egui::Ui,
    tree: &ElementTree,
    id: ElementId,
    depth: usize,
    selected: Option<ElementId>,
    events: &mut Vec<AppIntent>,
) {
    let Some(node) = tree.get(id) else {
        return;
    };

    ui.horizontal(|ui| {
        ui.add_space(depth as f32 * INDENT);
        if ui
            .selectable_label(selected == Some(id), describe(node))
            .clicked()
        {
            events.push(AppIntent::ElementClicked { element: id });
        }
    });

    for child in &node.children {
        render_element(ui, tree, *child, depth + 1, selected, events);
    }
}
