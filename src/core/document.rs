//! Geöffnetes Dokument und nicht-besitzende Element-Referenzen.

use super::element::ElementId;
use super::screen::ScreenConfiguration;
use std::path::{Path, PathBuf};

/// Opakes Handle auf ein von der Engine geparstes Dokument.
///
/// Die Engine besitzt die Daten hinter dem Handle; freigegeben wird es
/// ausschließlich über `RenderingEngine::release_handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentHandle(pub u64);

/// Laufende Nummer einer Dokument-Instanz. Jedes Öffnen/Neuladen erzeugt
/// eine neue Generation; Element-Referenzen älterer Generationen sind ungültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentGeneration(pub u64);

/// Nicht-besitzende Referenz auf ein Element einer bestimmten Dokument-Generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    /// Generation des Dokuments, in dessen Baum das Element liegt
    pub generation: DocumentGeneration,
    /// Index im Element-Baum
    pub element: ElementId,
}

/// Das aktuell geöffnete Dokument.
#[derive(Debug, Clone)]
pub struct OpenedDocument {
    /// Quellpfad der Markup-Datei
    pub source_path: PathBuf,
    /// Rohtext zum Zeitpunkt des Ladens
    pub raw_text: String,
    /// Engine-Handle (Ownership liegt bei der Engine)
    pub handle: DocumentHandle,
    /// Generation dieser Instanz
    pub generation: DocumentGeneration,
    /// Bildschirm-Konfiguration, mit der geladen wurde
    pub loaded_at: ScreenConfiguration,
}

impl OpenedDocument {
    /// Gibt `true` zurück, wenn die Referenz in diese Dokument-Instanz zeigt.
    pub fn owns(&self, element: &ElementRef) -> bool {
        element.generation == self.generation
    }

    /// Dateiname für Titel und Statuszeile.
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }

    /// Gibt `true` zurück, wenn `path` auf die Quelldatei zeigt.
    pub fn is_source(&self, path: &Path) -> bool {
        self.source_path == path
    }
}
