//! Handler für Bildschirmgröße, Orientierung und Render-Fläche.

use super::file_io::reload_current;
use crate::app::context::ViewerContext;
use crate::app::AppState;
use crate::core::Orientation;
use crate::shared::KEY_SCREEN_ORIENT;

/// Überträgt die Start-Konfiguration auf die Render-Fläche.
pub fn startup(state: &mut AppState, ctx: &mut ViewerContext) {
    let config = state.screen.config();
    ctx.engine.resize_render_surface(config.width, config.height);
    ctx.engine
        .set_debugger_visible(state.options.show_debugger_on_start);
    state.view.context_size = ctx.engine.context_size();
    log::info!(
        "Render-Fläche {}x{} ({})",
        config.width,
        config.height,
        config.orientation.label()
    );
}

/// Setzt die Bildschirmgröße. Ohne Orientierung gilt die aktuelle.
///
/// Nur wenn sich die orientierte Größe ändert: Render-Fläche anpassen,
/// geöffnetes Dokument neu laden, Größe speichern, Statusnachricht zeigen.
pub fn set_size(
    state: &mut AppState,
    ctx: &mut ViewerContext,
    width: u32,
    height: u32,
    orientation: Option<Orientation>,
) {
    let orientation = orientation.unwrap_or_else(|| state.screen.orientation());
    let Some(config) = state.screen.apply(width, height, orientation) else {
        log::debug!("Bildschirmgröße {}x{} unverändert", width, height);
        return;
    };

    ctx.engine.resize_render_surface(config.width, config.height);
    state.view.context_size = ctx.engine.context_size();
    reload_tolerant(state, ctx);
    state.screen.persist_size(ctx.preferences.as_mut());

    log::info!("Bildschirmgröße {}x{}", config.width, config.height);
    state.ui.log.push(&format!(
        "Screen;{}x{};{}",
        config.width,
        config.height,
        config.orientation.label()
    ));
    state.show_status(format!("Screen: {}x{}", config.width, config.height));
    state.view.request_repaint();
}

/// Übernimmt eine explizit gewählte Bildschirmgröße (Rahmen, Menü).
///
/// Eine feste Größe beendet "Fenstergröße folgen"; die Render-Fläche
/// kehrt dabei auf die übernommene Größe zurück.
pub fn select_screen_size(
    state: &mut AppState,
    ctx: &mut ViewerContext,
    width: u32,
    height: u32,
    orientation: Option<Orientation>,
) {
    let was_following = std::mem::take(&mut state.ui.follow_window_size);
    if was_following {
        log::info!("Fenstergröße folgen beendet");
    }
    set_size(state, ctx, width, height, orientation);
    if was_following {
        let config = state.screen.config();
        resize_render_surface(state, ctx, config.width, config.height);
    }
}

/// Wechselt die Orientierung: die rohe Größe der Render-Fläche wird unter
/// der neuen Orientierung neu geordnet und über `set_size` übernommen.
pub fn change_orientation(state: &mut AppState, ctx: &mut ViewerContext, orientation: Orientation) {
    let (width, height) = ctx.engine.context_size();
    if orientation != state.screen.orientation() {
        ctx.preferences
            .set_int(KEY_SCREEN_ORIENT, orientation.to_pref_value());
        log::info!("Orientierung: {}", orientation.label());
    }
    set_size(state, ctx, width, height, Some(orientation));
}

/// Passt die Render-Fläche direkt an den Vorschaubereich an
/// ("Fenstergröße folgen"). Es wird nichts gespeichert.
pub fn resize_render_surface(state: &mut AppState, ctx: &mut ViewerContext, width: u32, height: u32) {
    let (width, height) = (width.max(1), height.max(1));
    if ctx.engine.context_size() == (width, height) {
        return;
    }
    ctx.engine.resize_render_surface(width, height);
    state.view.context_size = ctx.engine.context_size();
    reload_tolerant(state, ctx);
    state.view.request_repaint();
}

/// Schaltet "Fenstergröße folgen". Beim Ausschalten kehrt die Render-Fläche
/// zur gespeicherten Bildschirmgröße zurück.
pub fn set_follow_window_size(state: &mut AppState, ctx: &mut ViewerContext, enabled: bool) {
    state.ui.follow_window_size = enabled;
    if !enabled {
        let config = state.screen.config();
        resize_render_surface(state, ctx, config.width, config.height);
    }
}

/// Reload nach Größenänderung; ein Fehler lässt das alte Dokument aktiv.
fn reload_tolerant(state: &mut AppState, ctx: &mut ViewerContext) {
    if !state.session.is_open() {
        return;
    }
    if let Err(e) = reload_current(state, ctx) {
        log::warn!("Reload nach Größenänderung fehlgeschlagen: {}", e);
        state.ui.log.push(&format!("Error;{e}"));
    }
}
