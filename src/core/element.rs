//! Element-Arena eines geparsten Dokuments.
//!
//! Der Baum besitzt alle Elemente; Referenzen von außen sind reine Indizes
//! (`ElementId`) und damit nie Ownership-Kanten.

/// Index eines Elements innerhalb seines `ElementTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Index in die Arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Einzelnes Element (Tag, `id`-Attribut, Klassen, Baumverknüpfung).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag-Name, z.B. `div`
    pub tag: String,
    /// Wert des `id`-Attributs
    pub dom_id: Option<String>,
    /// Klassen aus dem `class`-Attribut
    pub classes: Vec<String>,
    /// Elternelement (None = Wurzel)
    pub parent: Option<ElementId>,
    /// Kindelemente in Dokumentreihenfolge
    pub children: Vec<ElementId>,
}

/// Arena aller Elemente eines Dokuments. Index 0 ist die Wurzel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
}

impl ElementTree {
    /// Erstellt einen leeren Baum.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Fügt ein Element an und hängt es beim Elternelement ein.
    pub fn push(
        &mut self,
        parent: Option<ElementId>,
        tag: impl Into<String>,
        dom_id: Option<String>,
        classes: Vec<String>,
    ) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(ElementNode {
            tag: tag.into(),
            dom_id,
            classes,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p.index())) {
            parent.children.push(id);
        }
        id
    }

    /// Wurzelelement, falls vorhanden.
    pub fn root(&self) -> Option<ElementId> {
        (!self.nodes.is_empty()).then_some(ElementId(0))
    }

    /// Element zum Index.
    pub fn get(&self, id: ElementId) -> Option<&ElementNode> {
        self.nodes.get(id.index())
    }

    /// Anzahl der Elemente.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn der Baum leer ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Erstes Element mit passendem `id`-Attribut.
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|node| node.dom_id.as_deref() == Some(dom_id))
            .map(|i| ElementId(i as u32))
    }

    /// Selektor-artiger Pfad von der Wurzel bis zum Element,
    /// z.B. `rml > body > div#menu.panel`.
    pub fn path(&self, id: ElementId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.get(current) else {
                break;
            };
            segments.push(describe(node));
            cursor = node.parent;
        }
        segments.reverse();
        segments.join(" > ")
    }
}

/// Kurzbeschreibung `tag#id.class1.class2`.
pub fn describe(node: &ElementNode) -> String {
    let mut text = node.tag.clone();
    if let Some(dom_id) = &node.dom_id {
        text.push('#');
        text.push_str(dom_id);
    }
    for class in &node.classes {
        text.push('.');
        text.push_str(class);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (ElementTree, ElementId) {
        let mut tree = ElementTree::new();
        let root = tree.push(None, "rml", None, Vec::new());
        let body = tree.push(Some(root), "body", None, Vec::new());
        let panel = tree.push(
            Some(body),
            "div",
            Some("menu".to_string()),
            vec!["panel".to_string(), "dark".to_string()],
        );
        (tree, panel)
    }

    #[test]
    fn push_links_children_to_parent() {
        let (tree, panel) = sample_tree();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root(), Some(ElementId(0)));
        let body = tree.get(ElementId(1)).expect("body vorhanden");
        assert_eq!(body.children, vec![panel]);
    }

    #[test]
    fn path_walks_up_to_root() {
        let (tree, panel) = sample_tree();
        assert_eq!(tree.path(panel), "rml > body > div#menu.panel.dark");
    }

    #[test]
    fn find_by_dom_id_returns_first_match() {
        let (tree, panel) = sample_tree();
        assert_eq!(tree.find_by_dom_id("menu"), Some(panel));
        assert_eq!(tree.find_by_dom_id("nope"), None);
    }
}
