//! Dokument-Session: Öffnen/Neuladen des aktuellen Dokuments und Live-Reload.
//!
//! Zustände: `Empty` → `Open` (über `open`), `Open` → `Reloading` → `Open`
//! (über `reload`). Ein Dokumentwechsel tauscht das Dokument atomar aus:
//! neues Dokument installieren, Selektion leeren, erst dann das alte Handle
//! freigeben.

use super::context::ViewerContext;
use super::selection::{DocumentView, SelectionState};
use super::tools::ToolManager;
use super::watcher::PathWatcher;
use crate::core::{
    DocumentGeneration, LoadError, OpenedDocument, ScreenConfiguration, ViewerError,
};
use crate::engine::RenderingEngine;
use std::path::{Path, PathBuf};

/// Lebenszyklus-Zustand der Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Kein Dokument geöffnet
    #[default]
    Empty,
    /// Dokument geöffnet
    Open,
    /// Neuladen läuft
    Reloading,
}

/// Selektion und Tools, die beim Dokumentwechsel mit zurückgesetzt werden.
pub struct SelectionBinding<'a> {
    /// Selektionszustand
    pub selection: &'a mut SelectionState,
    /// Tool-Manager (für `on_unselect`)
    pub tools: &'a mut ToolManager,
}

/// Besitzt das aktuelle Dokument und die Dateiüberwachung.
#[derive(Default)]
pub struct DocumentSession {
    state: SessionState,
    current: Option<OpenedDocument>,
    next_generation: u64,
    watcher: Option<Box<dyn PathWatcher>>,
}

/// Suchpfade relativ zum Dokument: Verzeichnis, `fonts`/`textures` daneben
/// und eine Ebene darüber.
pub fn derived_search_paths(path: &Path) -> Vec<PathBuf> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    vec![
        directory.clone(),
        directory.join("fonts"),
        directory.join("../fonts"),
        directory.join("textures"),
        directory.join("../textures"),
    ]
}

impl DocumentSession {
    /// Erstellt eine leere Session ohne Dateiüberwachung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Dateiüberwachung an (Live-Reload).
    pub fn attach_watcher(&mut self, watcher: Box<dyn PathWatcher>) {
        self.watcher = Some(watcher);
    }

    /// Aktueller Lebenszyklus-Zustand.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Ist ein Dokument geöffnet?
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Das aktuelle Dokument.
    pub fn current(&self) -> Option<&OpenedDocument> {
        self.current.as_ref()
    }

    /// Dokument samt Element-Baum der Engine.
    pub fn view<'a>(&'a self, engine: &'a dyn RenderingEngine) -> Option<DocumentView<'a>> {
        let document = self.current.as_ref()?;
        let tree = engine.element_tree(document.handle)?;
        Some(DocumentView { document, tree })
    }

    /// Öffnet eine Markup-Datei und ersetzt das aktuelle Dokument.
    ///
    /// Fehlt die Datei, bleibt die Session unverändert (`FileNotFound`).
    /// Ein Engine-Fehler lässt das bisherige Dokument ebenfalls bestehen.
    pub fn open(
        &mut self,
        path: &Path,
        screen: ScreenConfiguration,
        context: &mut ViewerContext,
        binding: SelectionBinding<'_>,
    ) -> Result<DocumentGeneration, ViewerError> {
        if !path.exists() {
            return Err(ViewerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        log::info!("Open document {}", path.display());

        // Suchpfade und Fonts erst nach erfolgreichem Parsen übernehmen
        let derived = derived_search_paths(path);
        let document = self.load(path, screen, context, &derived)?;
        for search_path in derived {
            context.resources.add_search_path(search_path);
        }
        for search_path in context.resources.search_paths() {
            context.engine.load_fonts(&search_path);
        }

        let generation = document.generation;
        let previous_path = self.current.as_ref().map(|doc| doc.source_path.clone());

        self.install(document, context.engine.as_mut(), binding);
        self.rewatch(previous_path.as_deref(), path);
        Ok(generation)
    }

    /// Lädt das aktuelle Dokument mit der übergebenen Konfiguration neu.
    ///
    /// Gibt `None` zurück, wenn kein Dokument geöffnet ist. Schlägt das Laden
    /// fehl, bleibt das bisherige Dokument aktiv (alles oder nichts).
    pub fn reload(
        &mut self,
        screen: ScreenConfiguration,
        context: &mut ViewerContext,
        binding: SelectionBinding<'_>,
    ) -> Result<Option<DocumentGeneration>, ViewerError> {
        let Some(path) = self.current.as_ref().map(|doc| doc.source_path.clone()) else {
            return Ok(None);
        };

        self.state = SessionState::Reloading;
        match self.load(&path, screen, context, &[]) {
            Ok(document) => {
                let generation = document.generation;
                self.install(document, context.engine.as_mut(), binding);
                log::info!(
                    "Reload {} ({}x{})",
                    path.display(),
                    screen.width,
                    screen.height
                );
                Ok(Some(generation))
            }
            Err(e) => {
                self.state = SessionState::Open;
                Err(e)
            }
        }
    }

    /// Liest und parst die Datei zu einem neuen, noch nicht installierten Dokument.
    ///
    /// `extra_paths` ergänzen die registrierten Suchpfade nur für diesen Aufruf.
    fn load(
        &mut self,
        path: &Path,
        screen: ScreenConfiguration,
        context: &mut ViewerContext,
        extra_paths: &[PathBuf],
    ) -> Result<OpenedDocument, ViewerError> {
        let raw_text = std::fs::read_to_string(path)
            .map_err(|e| LoadError::new(e.to_string()).with_path(path))?;
        let mut search_paths = context.resources.search_paths();
        for extra in extra_paths {
            if !search_paths.contains(extra) {
                search_paths.push(extra.clone());
            }
        }
        let handle = context
            .engine
            .parse_document(&raw_text, &search_paths)
            .map_err(|e| e.with_path(path))?;

        self.next_generation += 1;
        Ok(OpenedDocument {
            source_path: path.to_path_buf(),
            raw_text,
            handle,
            generation: DocumentGeneration(self.next_generation),
            loaded_at: screen,
        })
    }

    /// Tauscht das Dokument aus. Die Selektion wird im selben Schritt geleert,
    /// das alte Handle erst nach der Installation freigegeben.
    fn install(
        &mut self,
        document: OpenedDocument,
        engine: &mut dyn RenderingEngine,
        binding: SelectionBinding<'_>,
    ) {
        let previous = self.current.replace(document);
        binding.selection.clear(binding.tools);
        self.state = SessionState::Open;
        if let Some(previous) = previous {
            engine.release_handle(previous.handle);
        }
    }

    fn rewatch(&mut self, previous: Option<&Path>, path: &Path) {
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };
        if let Some(previous) = previous.filter(|p| *p != path) {
            watcher.unwatch(previous);
        }
        if let Err(e) = watcher.watch(path) {
            log::warn!("Live-Reload für {} nicht verfügbar: {:#}", path.display(), e);
        }
    }
}
