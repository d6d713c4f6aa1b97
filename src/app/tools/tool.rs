//! Tool-Trait: Schnittstelle für alle Klick-Werkzeuge.

use super::ElementSummary;
use crate::core::{ElementId, ElementTree};

/// Stabile Identität eines Tools (Registrierungs-Key).
pub type ToolId = &'static str;

/// Rückgabe von `on_element_clicked`: was mit der Selektion passieren soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Angeklicktes Element selektieren
    SelectElement,
    /// Selektion aufheben
    ClearSelection,
    /// Klick ohne Wirkung auf die Selektion
    Ignore,
}

/// Schnittstelle für alle Tools (Select, Inspect, …).
pub trait Tool {
    /// Registrierungs-ID (eindeutig)
    fn id(&self) -> ToolId;

    /// Anzeigename für Toolbar und Menü
    fn name(&self) -> &str;

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Wird beim Aktivieren aufgerufen.
    fn on_activate(&mut self) {}

    /// Wird beim Wechsel auf ein anderes Tool aufgerufen.
    fn on_deactivate(&mut self) {}

    /// Element im geöffneten Dokument wurde angeklickt.
    fn on_element_clicked(&mut self, element: ElementId, tree: &ElementTree) -> ToolAction;

    /// Selektion wurde aufgehoben (auch nach Dokumentwechsel).
    fn on_unselect(&mut self) {}

    /// Zuletzt inspiziertes Element (nur Inspect-artige Tools).
    fn inspection(&self) -> Option<&ElementSummary> {
        None
    }
}
