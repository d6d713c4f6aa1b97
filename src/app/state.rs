//! Application State: zentrale Datenhaltung.

use super::log_table::LogTable;
use super::screen::ScreenDimensionController;
use super::selection::SelectionState;
use super::session::DocumentSession;
use super::tools::ToolManager;
use super::CommandLog;
use crate::shared::{PreferenceStore, ViewerOptions};
use std::time::{Duration, Instant};

/// Transiente Statusnachricht mit Ablaufzeit.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Angezeigter Text
    pub text: String,
    /// Zeitpunkt der Anzeige
    pub shown_at: Instant,
    /// Anzeigedauer
    pub timeout: Duration,
}

impl StatusMessage {
    /// Gibt `true` zurück, wenn die Nachricht zu `now` abgelaufen ist.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.timeout
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Zoom-Faktor der Vorschau (1.0 = 1:1)
    pub zoom_level: f32,
    /// Letzte Zeigerposition auf der Render-Fläche (Pixel)
    pub mouse_pos: glam::IVec2,
    /// Größe des Vorschaubereichs im Fenster (Punkte)
    pub preview_size: [f32; 2],
    /// Gespiegelte Größe der Render-Fläche für die Statuszeile
    pub context_size: (u32, u32),
    needs_repaint: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            zoom_level: 1.0,
            mouse_pos: glam::IVec2::ZERO,
            preview_size: [0.0, 0.0],
            context_size: (0, 0),
            needs_repaint: false,
        }
    }

    /// Fordert ein Neuzeichnen an; der Host holt die Anforderung ab.
    pub fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Ist ein Neuzeichnen angefordert?
    pub fn repaint_requested(&self) -> bool {
        self.needs_repaint
    }

    /// Holt die Anforderung ab und setzt sie zurück.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob das Log-Panel sichtbar ist
    pub show_log_panel: bool,
    /// Render-Fläche folgt der Größe des Vorschaubereichs
    pub follow_window_size: bool,
    /// Temporäre Statusnachricht (z.B. neue Bildschirmgröße)
    pub status_message: Option<StatusMessage>,
    /// In-App-Protokoll
    pub log: LogTable,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Text der Statusnachricht, solange sie nicht abgelaufen ist.
    pub fn status_text(&self, now: Instant) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|msg| !msg.is_expired(now))
            .map(|msg| msg.text.as_str())
    }

    /// Entfernt eine abgelaufene Statusnachricht.
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|msg| msg.is_expired(now))
        {
            self.status_message = None;
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Bildschirmgröße und Orientierung
    pub screen: ScreenDimensionController,
    /// Geöffnetes Dokument und Live-Reload
    pub session: DocumentSession,
    /// Selektiertes Element
    pub selection: SelectionState,
    /// Registrierte Tools und aktives Tool
    pub tools: ToolManager,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_screen(ViewerOptions::default(), ScreenDimensionController::default())
    }

    /// Erstellt den App-State; die Bildschirmgröße kommt aus den Einstellungen.
    pub fn from_preferences(options: ViewerOptions, prefs: &dyn PreferenceStore) -> Self {
        let screen = ScreenDimensionController::from_preferences(prefs, &options);
        Self::with_screen(options, screen)
    }

    fn with_screen(options: ViewerOptions, screen: ScreenDimensionController) -> Self {
        let ui = UiState {
            follow_window_size: options.follow_window_size,
            log: LogTable::new(options.log_capacity),
            ..UiState::new()
        };
        Self {
            screen,
            session: DocumentSession::new(),
            selection: SelectionState::new(),
            tools: ToolManager::with_default_tools(),
            view: ViewState::new(),
            ui,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Zeigt eine transiente Statusnachricht mit der konfigurierten Dauer.
    pub fn show_status(&mut self, text: impl Into<String>) {
        self.ui.status_message = Some(StatusMessage {
            text: text.into(),
            shown_at: Instant::now(),
            timeout: Duration::from_millis(self.options.status_message_timeout_ms),
        });
    }

    /// Fenstertitel mit Dateiname des geöffneten Dokuments.
    pub fn window_title(&self) -> String {
        match self.session.current() {
            Some(doc) => format!("RML Viewer - {}", doc.file_name()),
            None => "RML Viewer".to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
