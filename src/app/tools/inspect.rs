use super::{Tool, ToolAction, ToolId};
use crate::core::element::describe;
use crate::core::{ElementId, ElementTree};

/// Zusammenfassung eines inspizierten Elements für das Eigenschaften-Panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSummary {
    /// Tag-Name
    pub tag: String,
    /// `id`-Attribut
    pub dom_id: Option<String>,
    /// Klassen
    pub classes: Vec<String>,
    /// Pfad von der Wurzel (`rml > body > div#x`)
    pub path: String,
    /// Anzahl direkter Kinder
    pub child_count: usize,
}

impl ElementSummary {
    /// Baut die Zusammenfassung aus dem Element-Baum.
    pub fn from_tree(element: ElementId, tree: &ElementTree) -> Option<Self> {
        let node = tree.get(element)?;
        Some(Self {
            tag: node.tag.clone(),
            dom_id: node.dom_id.clone(),
            classes: node.classes.clone(),
            path: tree.path(element),
            child_count: node.children.len(),
        })
    }

    /// Einzeilige Darstellung für Log und Statuszeile.
    pub fn headline(&self) -> String {
        let mut text = self.tag.clone();
        if let Some(dom_id) = &self.dom_id {
            text.push('#');
            text.push_str(dom_id);
        }
        text
    }
}

/// Inspect-Tool: selektiert und hält eine Zusammenfassung des Elements.
#[derive(Debug, Default)]
pub struct InspectTool {
    inspected: Option<ElementSummary>,
}

impl InspectTool {
    /// Registrierungs-ID
    pub const ID: ToolId = "inspect";

    /// Erstellt ein Inspect-Tool ohne Inspektion.
    pub fn new() -> Self {
        Self { inspected: None }
    }
}

impl Tool for InspectTool {
    fn id(&self) -> ToolId {
        Self::ID
    }

    fn name(&self) -> &str {
        "Inspect"
    }

    fn description(&self) -> &str {
        "Element anklicken, um Tag, ID, Klassen und Pfad anzuzeigen"
    }

    fn on_deactivate(&mut self) {
        self.inspected = None;
    }

    fn on_element_clicked(&mut self, element: ElementId, tree: &ElementTree) -> ToolAction {
        match ElementSummary::from_tree(element, tree) {
            Some(summary) => {
                log::info!("Inspect: {}", summary.path);
                self.inspected = Some(summary);
                ToolAction::SelectElement
            }
            None => ToolAction::Ignore,
        }
    }

    fn on_unselect(&mut self) {
        self.inspected = None;
    }

    fn inspection(&self) -> Option<&ElementSummary> {
        self.inspected.as_ref()
    }
}
