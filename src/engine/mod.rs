//! Schnittstellen zur externen Rendering-Engine und zum Ressourcen-Resolver.
//!
//! Die Koordinationsschicht kennt die Engine nur über diese Traits. Die
//! mitgelieferte `HeadlessEngine` baut lediglich den Element-Baum auf und
//! dient als Referenz-Implementierung für Host und Tests.

mod headless;
mod markup;
mod search_paths;

pub use headless::HeadlessEngine;
pub use markup::parse_markup;
pub use search_paths::SearchPaths;

use crate::core::{DocumentHandle, ElementTree, LoadError};
use std::path::{Path, PathBuf};

/// Element-IDs der Debugger-Overlay-Bedienelemente.
pub const RESERVED_DEBUGGER_IDS: [&str; 3] =
    ["event-log-button", "debug-info-button", "outlines-button"];

/// Port zur Rendering-Engine (Parsen, Handles, Render-Fläche, Debugger).
pub trait RenderingEngine {
    /// Parst Markup-Text und liefert ein Handle auf das neue Dokument.
    fn parse_document(
        &mut self,
        text: &str,
        search_paths: &[PathBuf],
    ) -> Result<DocumentHandle, LoadError>;

    /// Gibt ein Dokument-Handle frei. Unbekannte Handles werden ignoriert.
    fn release_handle(&mut self, handle: DocumentHandle);

    /// Element-Baum eines lebenden Handles.
    fn element_tree(&self, handle: DocumentHandle) -> Option<&ElementTree>;

    /// Ändert die Größe der Render-Fläche in Pixel.
    fn resize_render_surface(&mut self, width: u32, height: u32);

    /// Aktuelle (rohe) Größe der Render-Fläche.
    fn context_size(&self) -> (u32, u32);

    /// Lädt Schriftarten aus einem Verzeichnis. Gibt die Anzahl neu
    /// registrierter Fonts zurück.
    fn load_fonts(&mut self, directory: &Path) -> usize;

    /// Ist das Debugger-Overlay sichtbar?
    fn debugger_visible(&self) -> bool;

    /// Blendet das Debugger-Overlay ein/aus.
    fn set_debugger_visible(&mut self, visible: bool);
}

/// Port zum Ressourcen-Resolver der Engine (Suchpfade für Fonts/Texturen).
pub trait ResourceResolver {
    /// Registriert einen Suchpfad. Gibt `false` zurück, wenn er schon bekannt war.
    fn add_search_path(&mut self, path: PathBuf) -> bool;

    /// Alle registrierten Suchpfade in Registrierungsreihenfolge.
    fn search_paths(&self) -> Vec<PathBuf>;
}
