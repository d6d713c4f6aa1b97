use super::{Tool, ToolAction, ToolId};
use crate::core::{ElementId, ElementTree};

/// Select-Tool (Default)
#[derive(Debug, Default)]
pub struct SelectTool {
    active: bool,
}

impl SelectTool {
    /// Registrierungs-ID
    pub const ID: ToolId = "select";

    /// Erstellt ein inaktives Select-Tool.
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Ist das Tool aktuell aktiv?
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        Self::ID
    }

    fn name(&self) -> &str {
        "Select"
    }

    fn description(&self) -> &str {
        "Element anklicken, um es zu selektieren"
    }

    fn on_activate(&mut self) {
        self.active = true;
    }

    fn on_deactivate(&mut self) {
        self.active = false;
    }

    fn on_element_clicked(&mut self, element: ElementId, tree: &ElementTree) -> ToolAction {
        if tree.get(element).is_some() {
            ToolAction::SelectElement
        } else {
            ToolAction::Ignore
        }
    }
}
