//! Handler für Datei-Operationen (Öffnen, Neuladen, Live-Reload).

use crate::app::context::ViewerContext;
use crate::app::session::SelectionBinding;
use crate::app::AppState;
use crate::core::{DocumentGeneration, ViewerError};
use std::path::{Path, PathBuf};

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet ein Dokument mit der aktuellen Bildschirm-Konfiguration.
///
/// Fehler (`FileNotFound`, `Load`) gehen an den Aufrufer; die Session
/// bleibt dann unverändert.
pub fn open(state: &mut AppState, ctx: &mut ViewerContext, path: PathBuf) -> anyhow::Result<()> {
    let screen = state.screen.config();
    let result = state.session.open(
        &path,
        screen,
        ctx,
        SelectionBinding {
            selection: &mut state.selection,
            tools: &mut state.tools,
        },
    );

    match result {
        Ok(generation) => {
            log::info!("Dokument geöffnet: {} ({:?})", path.display(), generation);
            state.ui.log.push(&format!(
                "Open;{};{}x{}",
                path.display(),
                screen.width,
                screen.height
            ));
            state.view.request_repaint();
            Ok(())
        }
        Err(e) => {
            state.ui.log.push(&format!("Error;{e}"));
            Err(e.into())
        }
    }
}

/// Lädt das geöffnete Dokument explizit neu; Fehler gehen an den Aufrufer.
pub fn reload(state: &mut AppState, ctx: &mut ViewerContext) -> anyhow::Result<()> {
    if let Err(e) = reload_current(state, ctx) {
        state.ui.log.push(&format!("Error;{e}"));
        return Err(e.into());
    }
    Ok(())
}

/// Reload nach Dateiänderung. Fehler lassen das letzte gültige Dokument
/// aktiv und erscheinen nur als Statusnachricht und Log-Zeile.
pub fn reload_changed_file(state: &mut AppState, ctx: &mut ViewerContext, path: &Path) {
    log::info!("Datei geändert: {}", path.display());
    if let Err(e) = reload_current(state, ctx) {
        log::warn!("Reload nach Dateiänderung fehlgeschlagen: {}", e);
        state.ui.log.push(&format!("Error;{e}"));
        state.show_status(format!("Reload failed: {e}"));
    }
}

/// Lädt das aktuelle Dokument mit der aktuellen Bildschirm-Konfiguration neu.
pub(crate) fn reload_current(
    state: &mut AppState,
    ctx: &mut ViewerContext,
) -> Result<Option<DocumentGeneration>, ViewerError> {
    let screen = state.screen.config();
    let generation = state.session.reload(
        screen,
        ctx,
        SelectionBinding {
            selection: &mut state.selection,
            tools: &mut state.tools,
        },
    )?;

    if let Some(doc) = state.session.current().filter(|_| generation.is_some()) {
        state.ui.log.push(&format!(
            "Reload;{};{}x{}",
            doc.file_name(),
            screen.width,
            screen.height
        ));
        state.view.request_repaint();
    }
    Ok(generation)
}
