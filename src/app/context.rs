//! Laufzeit-Kontext: die externen Ports, die der Controller bedient.

use crate::engine::{HeadlessEngine, RenderingEngine, ResourceResolver, SearchPaths};
use crate::shared::{MemoryPreferences, PreferenceStore, ViewerOptions};

/// Bündelt Engine, Ressourcen-Resolver und Einstellungsspeicher.
///
/// Der Host erzeugt den Kontext einmal beim Start; `AppState` bleibt dadurch
/// reine Daten ohne Trait-Objekte.
pub struct ViewerContext {
    /// Rendering-Engine
    pub engine: Box<dyn RenderingEngine>,
    /// Suchpfade für Fonts/Texturen
    pub resources: Box<dyn ResourceResolver>,
    /// Persistente Einstellungen
    pub preferences: Box<dyn PreferenceStore>,
}

impl ViewerContext {
    /// Erstellt einen Kontext aus den übergebenen Ports.
    pub fn new(
        engine: Box<dyn RenderingEngine>,
        resources: Box<dyn ResourceResolver>,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            engine,
            resources,
            preferences,
        }
    }

    /// Headless-Kontext mit flüchtigen Einstellungen (Tests, Werkzeuge).
    pub fn headless(options: &ViewerOptions, preferences: MemoryPreferences) -> Self {
        Self::new(
            Box::new(HeadlessEngine::new(
                options.default_screen_width,
                options.default_screen_height,
            )),
            Box::new(SearchPaths::new()),
            Box::new(preferences),
        )
    }
}
