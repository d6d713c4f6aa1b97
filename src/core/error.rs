//! Fehler-Taxonomie des Viewers.

use std::path::PathBuf;

/// Fehler beim Parsen/Aufbauen eines Dokuments in der Rendering-Engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render_load_error(.path, .message))]
pub struct LoadError {
    /// Quellpfad, falls bekannt
    pub path: Option<PathBuf>,
    /// Beschreibung der Engine
    pub message: String,
}

fn render_load_error(path: &Option<PathBuf>, message: &str) -> String {
    match path {
        Some(path) => format!("failed to load {}: {}", path.display(), message),
        None => format!("failed to load document: {message}"),
    }
}

impl LoadError {
    /// Erstellt einen LoadError ohne Pfad (Engine-Seite).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }

    /// Ergänzt den Quellpfad (Session-Seite).
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Alle Fehler der Koordinationsschicht.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
    /// Datei existiert beim Öffnen nicht; Session bleibt unverändert
    #[error("File {} not found.", .path.display())]
    FileNotFound {
        /// Angefragter Pfad
        path: PathBuf,
    },
    /// Engine konnte das Dokument nicht laden; Session bleibt unverändert
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Tool-ID doppelt registriert (Programmierfehler beim Start)
    #[error("tool '{id}' is already registered")]
    DuplicateTool {
        /// Doppelte Tool-ID
        id: String,
    },
    /// Tool-ID ist nicht registriert
    #[error("tool '{id}' is not registered")]
    UnknownTool {
        /// Unbekannte Tool-ID
        id: String,
    },
    /// Rahmen-Index außerhalb des Katalogs
    #[error("device frame index {index} out of range (catalog has {len} entries)")]
    InvalidFrameIndex {
        /// Angefragter Index
        index: usize,
        /// Katalog-Größe
        len: usize,
    },
}
