//! Handler für Zoom, Statuszeile, Debugger und Log-Panel.

use crate::app::context::ViewerContext;
use crate::app::AppState;

/// Übernimmt die Zeigerposition für die Statuszeile.
pub fn show_pointer_position(state: &mut AppState, position: glam::IVec2) {
    state.view.mouse_pos = position;
}

/// Merkt die Größe des Vorschaubereichs.
pub fn set_preview_size(state: &mut AppState, width: u32, height: u32) {
    state.view.preview_size = [width as f32, height as f32];
}

/// Setzt den Zoom-Faktor, begrenzt auf den konfigurierten Bereich.
pub fn set_zoom_level(state: &mut AppState, level: f32) {
    if !level.is_finite() {
        log::warn!("Ungültiger Zoom-Faktor ignoriert: {}", level);
        return;
    }
    let clamped = state.options.clamp_zoom(level);
    if clamped != state.view.zoom_level {
        state.view.zoom_level = clamped;
        state.view.request_repaint();
    }
}

/// Blendet das Debugger-Overlay der Engine ein oder aus.
pub fn toggle_debugger(state: &mut AppState, ctx: &mut ViewerContext) {
    let visible = !ctx.engine.debugger_visible();
    ctx.engine.set_debugger_visible(visible);
    log::info!("Debugger {}", if visible { "eingeblendet" } else { "ausgeblendet" });
    state.view.request_repaint();
}

/// Blendet das Log-Panel ein oder aus.
pub fn toggle_log_panel(state: &mut AppState) {
    state.ui.show_log_panel = !state.ui.show_log_panel;
}
