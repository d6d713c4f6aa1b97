use crate::app::tools::ToolId;
use crate::core::{ElementId, Orientation};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Dokument öffnen
    OpenDocument { path: PathBuf },
    /// Aktuelles Dokument neu laden (Fehler gehen an den Aufrufer)
    ReloadDocument,
    /// Reload nach Dateiänderung (Fehler nur als Statusmeldung)
    ReloadChangedFile { path: PathBuf },
    /// Anwendung beenden
    RequestExit,
    /// Zeigerposition in die Statuszeile übernehmen
    ShowPointerPosition { position: glam::IVec2 },
    /// Klick an das aktive Tool weiterreichen
    DispatchElementClick { element: ElementId },
    /// Selektion aufheben (benachrichtigt das aktive Tool)
    ClearSelection,
    /// Aktives Tool wechseln
    SetCurrentTool { id: ToolId },
    /// Bildschirmgröße setzen; ohne Orientierung gilt die aktuelle
    SetScreenSize {
        width: u32,
        height: u32,
        orientation: Option<Orientation>,
    },
    /// Orientierung wechseln und Größe neu ableiten
    ChangeOrientation { orientation: Orientation },
    /// Größe des Vorschaubereichs merken
    SetPreviewSize { width: u32, height: u32 },
    /// Render-Fläche direkt an den Vorschaubereich anpassen
    ResizeRenderSurface { width: u32, height: u32 },
    /// "Fenstergröße folgen" setzen
    SetFollowWindowSize { enabled: bool },
    /// Zoom-Faktor setzen (wird begrenzt)
    SetZoomLevel { level: f32 },
    /// Debugger-Overlay ein-/ausblenden
    ToggleDebugger,
    /// Log-Panel ein-/ausblenden
    ToggleLogPanel,
}
