use crate::app::tools::ToolId;
use crate::core::{ElementId, Orientation};
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei im Dialog oder per Kommandozeile gewählt
    FileSelected { path: PathBuf },
    /// Aktuelles Dokument explizit neu laden
    ReloadRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Dateiüberwachung meldet eine Änderung
    FileChanged { path: PathBuf },
    /// Zeigerposition auf der Render-Fläche (Pixel)
    PointerMoved { position: glam::IVec2 },
    /// Element auf der Render-Fläche angeklickt
    ElementClicked { element: ElementId },
    /// Selektion aufheben
    UnselectRequested,
    /// Tool wechseln
    ToolSelected { id: ToolId },
    /// Geräte-Rahmen aus dem Katalog gewählt
    FrameSelected { index: usize },
    /// Orientierung umgeschaltet
    OrientationSelected { orientation: Orientation },
    /// Vorschaubereich hat eine neue Größe (Pixel)
    PreviewAreaResized { width: u32, height: u32 },
    /// "Fenstergröße folgen" umgeschaltet
    FollowWindowSizeToggled { enabled: bool },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom direkt setzen (z.B. Schieberegler)
    ZoomChanged { level: f32 },
    /// Zoom auf 1:1 zurücksetzen
    ResetZoomRequested,
    /// Debugger-Overlay ein-/ausblenden
    DebuggerToggled,
    /// Log-Panel ein-/ausblenden
    LogPanelToggled,
}
