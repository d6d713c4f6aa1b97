use crate::app::{AppIntent, AppState};

/// Öffnet den angeforderten Datei-Dialog und liefert die Auswahl als Intent.
///
/// Der Dialog startet im Verzeichnis des geöffneten Dokuments.
pub fn handle_file_dialogs(state: &mut AppState) -> Vec<AppIntent> {
    if !std::mem::take(&mut state.ui.show_file_dialog) {
        return Vec::new();
    }

    let mut dialog = rfd::FileDialog::new()
        .set_title("Open RML Document")
        .add_filter("RML Document", &["rml"])
        .add_filter("All Files", &["*"]);
    if let Some(dir) = state
        .session
        .current()
        .and_then(|doc| doc.source_path.parent())
        .filter(|dir| dir.is_dir())
    {
        dialog = dialog.set_directory(dir);
    }

    dialog
        .pick_file()
        .map(|path| AppIntent::FileSelected { path })
        .into_iter()
        .collect()
}
