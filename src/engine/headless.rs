//! Headless-Engine: verwaltet Dokument-Handles, Render-Flächengröße und Fonts,
//! ohne zu zeichnen.

use super::{parse_markup, RenderingEngine};
use crate::core::{DocumentHandle, ElementTree, LoadError};
use indexmap::{IndexMap, IndexSet};
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Referenz-Engine ohne Paint-Pipeline.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    documents: IndexMap<DocumentHandle, ElementTree>,
    next_handle: u64,
    context_size: (u32, u32),
    debugger_visible: bool,
    fonts: IndexSet<PathBuf>,
    released: usize,
}

impl HeadlessEngine {
    /// Erstellt eine Engine mit der Render-Fläche `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            context_size: (width, height),
            ..Self::default()
        }
    }

    /// Anzahl der aktuell lebenden Dokument-Handles.
    pub fn live_documents(&self) -> usize {
        self.documents.len()
    }

    /// Anzahl bisher freigegebener Handles.
    pub fn released_count(&self) -> usize {
        self.released
    }

    /// Alle registrierten Font-Dateien.
    pub fn fonts(&self) -> impl Iterator<Item = &PathBuf> {
        self.fonts.iter()
    }
}

impl RenderingEngine for HeadlessEngine {
    fn parse_document(
        &mut self,
        text: &str,
        search_paths: &[PathBuf],
    ) -> Result<DocumentHandle, LoadError> {
        let tree = parse_markup(text)?;
        self.next_handle += 1;
        let handle = DocumentHandle(self.next_handle);
        log::debug!(
            "Dokument {:?} geparst: {} Elemente, {} Suchpfade",
            handle,
            tree.len(),
            search_paths.len()
        );
        self.documents.insert(handle, tree);
        Ok(handle)
    }

    fn release_handle(&mut self, handle: DocumentHandle) {
        if self.documents.shift_remove(&handle).is_some() {
            self.released += 1;
        }
    }

    fn element_tree(&self, handle: DocumentHandle) -> Option<&ElementTree> {
        self.documents.get(&handle)
    }

    fn resize_render_surface(&mut self, width: u32, height: u32) {
        self.context_size = (width, height);
    }

    fn context_size(&self) -> (u32, u32) {
        self.context_size
    }

    fn load_fonts(&mut self, directory: &Path) -> usize {
        let Ok(entries) = std::fs::read_dir(directory) else {
            return 0;
        };
        let mut added = 0;
        for path in entries.flatten().map(|entry| entry.path()) {
            let is_font = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    FONT_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                });
            if is_font && self.fonts.insert(path) {
                added += 1;
            }
        }
        if added > 0 {
            log::info!("{} Font(s) geladen aus {}", added, directory.display());
        }
        added
    }

    fn debugger_visible(&self) -> bool {
        self.debugger_visible
    }

    fn set_debugger_visible(&mut self, visible: bool) {
        self.debugger_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_drops_tree_and_counts() {
        let mut engine = HeadlessEngine::new(320, 480);
        let handle = engine
            .parse_document("<rml><body/></rml>", &[])
            .expect("gültiges Markup");
        assert!(engine.element_tree(handle).is_some());

        engine.release_handle(handle);
        engine.release_handle(handle);

        assert!(engine.element_tree(handle).is_none());
        assert_eq!(engine.released_count(), 1);
        assert_eq!(engine.live_documents(), 0);
    }

    #[test]
    fn handles_are_unique_per_parse() {
        let mut engine = HeadlessEngine::new(1, 1);
        let a = engine.parse_document("<rml/>", &[]).expect("a");
        let b = engine.parse_document("<rml/>", &[]).expect("b");
        assert_ne!(a, b);
    }

    #[test]
    fn load_fonts_picks_font_files_once() {
        let dir = std::env::temp_dir().join("rml_viewer_test_fonts");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        std::fs::write(dir.join("Delicious.otf"), b"").expect("Font schreiben");
        std::fs::write(dir.join("Roboto.TTF"), b"").expect("Font schreiben");
        std::fs::write(dir.join("readme.txt"), b"").expect("Text schreiben");

        let mut engine = HeadlessEngine::new(1, 1);
        assert_eq!(engine.load_fonts(&dir), 2);
        assert_eq!(engine.load_fonts(&dir), 0);
        assert_eq!(engine.load_fonts(&dir.join("missing")), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
