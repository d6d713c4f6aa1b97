//! Selektionszustand: das eine aktive Element des geöffneten Dokuments.

use super::tools::ToolManager;
use crate::core::{ElementId, ElementRef, ElementTree, OpenedDocument};
use crate::engine::RESERVED_DEBUGGER_IDS;

/// Lesesicht auf das geöffnete Dokument samt Element-Baum.
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    /// Aktuelles Dokument
    pub document: &'a OpenedDocument,
    /// Element-Baum des Engine-Handles
    pub tree: &'a ElementTree,
}

/// Gibt `true` zurück, wenn `element` ein Bedienelement des sichtbaren
/// Debugger-Overlays ist. Klicks darauf erreichen weder Tool noch Selektion.
pub fn is_debugger_control(tree: &ElementTree, element: ElementId, debugger_visible: bool) -> bool {
    debugger_visible
        && tree
            .get(element)
            .and_then(|node| node.dom_id.as_deref())
            .is_some_and(|id| RESERVED_DEBUGGER_IDS.contains(&id))
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<ElementRef>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Selektiert ein Element des geöffneten Dokuments.
    ///
    /// No-op ohne Dokument, für unbekannte Elemente und für die Bedienelemente
    /// des sichtbaren Debugger-Overlays. Gibt `true` zurück, wenn die Selektion
    /// gesetzt wurde.
    pub fn select(
        &mut self,
        view: Option<DocumentView<'_>>,
        element: ElementId,
        debugger_visible: bool,
    ) -> bool {
        let Some(view) = view else {
            return false;
        };
        if view.tree.get(element).is_none() {
            log::debug!("Selektion ignoriert: Element {:?} unbekannt", element);
            return false;
        }
        if is_debugger_control(view.tree, element, debugger_visible) {
            log::debug!("Selektion ignoriert: Debugger-Element {:?}", element);
            return false;
        }

        self.selected = Some(ElementRef {
            generation: view.document.generation,
            element,
        });
        true
    }

    /// Hebt die Selektion auf und benachrichtigt das aktive Tool.
    pub fn clear(&mut self, tools: &mut ToolManager) {
        self.selected = None;
        tools.dispatch_unselect();
    }

    /// Aktuelle Selektion (ungeprüft).
    pub fn current(&self) -> Option<ElementRef> {
        self.selected
    }

    /// Aktuelle Selektion, nur wenn sie in das übergebene Dokument zeigt.
    pub fn current_in(&self, document: Option<&OpenedDocument>) -> Option<ElementRef> {
        let document = document?;
        self.selected.filter(|element| document.owns(element))
    }
}
