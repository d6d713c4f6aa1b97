//! Gemeinsamer Aufbau für die Controller-Integrationstests.

#![allow(dead_code)]

use rml_viewer::{
    AppCommand, AppController, AppIntent, AppState, ElementId, MemoryPreferences, ViewerContext,
    ViewerOptions,
};
use std::path::PathBuf;

/// Beispiel-Dokument mit normalem Inhalt und Debugger-Bedienelement.
pub const SAMPLE: &str = r#"<rml>
  <head><title>Demo</title></head>
  <body>
    <div id="menu" class="panel">
      <button id="start">Start</button>
    </div>
    <button id="outlines-button">Outlines</button>
  </body>
</rml>"#;

/// Controller, State und ein geteilter Blick auf die Einstellungen.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub prefs: MemoryPreferences,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_prefs(MemoryPreferences::new())
    }

    /// Startet mit vorbelegten Einstellungen; Klone teilen sich den Speicher.
    pub fn with_prefs(prefs: MemoryPreferences) -> Self {
        let options = ViewerOptions::default();
        let mut state = AppState::from_preferences(options.clone(), &prefs);
        let context = ViewerContext::headless(&options, prefs.clone());
        let mut controller = AppController::new(context);
        controller.startup(&mut state);
        Self {
            controller,
            state,
            prefs,
        }
    }

    pub fn send(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    pub fn command(&mut self, command: AppCommand) -> anyhow::Result<()> {
        self.controller.handle_command(&mut self.state, command)
    }

    pub fn last_command(&self) -> Option<&str> {
        self.state.command_log.last()
    }

    /// Sucht ein Element des geöffneten Dokuments über seine DOM-ID.
    pub fn element(&self, dom_id: &str) -> ElementId {
        let view = self
            .state
            .session
            .view(self.controller.engine())
            .expect("Dokument sollte geöffnet sein");
        view.tree
            .find_by_dom_id(dom_id)
            .unwrap_or_else(|| panic!("Element '{dom_id}' fehlt"))
    }

    pub fn generation(&self) -> Option<u64> {
        self.state.session.current().map(|doc| doc.generation.0)
    }
}

/// Schreibt ein Dokument in ein testeigenes Temp-Verzeichnis.
pub fn temp_document(dir: &str, name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("rml_viewer_integration")
        .join(dir);
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegbar");
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Temp-Datei schreibbar");
    path
}
