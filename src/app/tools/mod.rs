//! Trait-basiertes Tool-System für Klick-Werkzeuge auf Dokument-Elementen.
//!
//! Jedes Tool implementiert den `Tool`-Trait und wird beim `ToolManager`
//! registriert. Tools liefern reine Daten (`ToolAction`), die Mutation der
//! Selektion erfolgt zentral im Selektions-Handler.

/// Inspect-Tool: selektiert und merkt sich eine Element-Zusammenfassung.
pub mod inspect;
/// Select-Tool: selektiert das angeklickte Element.
pub mod select;
mod tool;

pub use inspect::{ElementSummary, InspectTool};
pub use select::SelectTool;
pub use tool::{Tool, ToolAction, ToolId};

use crate::core::{ElementId, ElementTree, ViewerError};
use indexmap::IndexMap;

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Tools und das aktive Tool.
///
/// Nach der Konstruktion ist immer genau ein Tool aktiv.
pub struct ToolManager {
    tools: IndexMap<ToolId, Box<dyn Tool>>,
    current: usize,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen ToolManager mit dem Select-Tool als aktivem Default.
    pub fn new() -> Self {
        let mut select: Box<dyn Tool> = Box::new(SelectTool::new());
        select.on_activate();
        let mut tools = IndexMap::new();
        tools.insert(select.id(), select);
        Self { tools, current: 0 }
    }

    /// Erstellt einen ToolManager mit allen Standard-Tools (Select, Inspect).
    pub fn with_default_tools() -> Self {
        let mut manager = Self::new();
        let inspect: Box<dyn Tool> = Box::new(InspectTool::new());
        manager.tools.entry(inspect.id()).or_insert(inspect);
        manager
    }

    /// Registriert ein neues Tool. Doppelte IDs sind ein Programmierfehler.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), ViewerError> {
        let id = tool.id();
        if self.tools.contains_key(id) {
            return Err(ViewerError::DuplicateTool { id: id.to_string() });
        }
        self.tools.insert(id, tool);
        Ok(())
    }

    /// Wechselt das aktive Tool.
    ///
    /// Gibt `true` zurück, wenn tatsächlich gewechselt wurde; ein erneutes
    /// Setzen des aktiven Tools ist ein No-op.
    pub fn set_current_tool(&mut self, id: &str) -> Result<bool, ViewerError> {
        let Some(index) = self.tools.get_index_of(id) else {
            return Err(ViewerError::UnknownTool { id: id.to_string() });
        };
        if index == self.current {
            return Ok(false);
        }

        self.tools[self.current].on_deactivate();
        self.current = index;
        self.tools[index].on_activate();
        log::info!("Tool gewechselt: {}", self.tools[index].name());
        Ok(true)
    }

    /// Das aktive Tool.
    pub fn current_tool(&self) -> &dyn Tool {
        self.tools[self.current].as_ref()
    }

    /// ID des aktiven Tools.
    pub fn current_id(&self) -> ToolId {
        self.current_tool().id()
    }

    /// Leitet einen Element-Klick an das aktive Tool weiter.
    pub fn dispatch_element_clicked(&mut self, element: ElementId, tree: &ElementTree) -> ToolAction {
        self.tools[self.current].on_element_clicked(element, tree)
    }

    /// Leitet das Aufheben der Selektion an das aktive Tool weiter.
    pub fn dispatch_unselect(&mut self) {
        self.tools[self.current].on_unselect();
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt ID und Name aller Tools in Registrierungsreihenfolge zurück.
    pub fn tool_entries(&self) -> Vec<(ToolId, &str)> {
        self.tools
            .iter()
            .map(|(id, tool)| (*id, tool.name()))
            .collect()
    }

    /// Tool per ID.
    pub fn get(&self, id: &str) -> Option<&dyn Tool> {
        self.tools.get(id).map(|tool| tool.as_ref())
    }
}
