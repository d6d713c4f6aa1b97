//! Persistierte Benutzer-Einstellungen (logische Keys/Werte).
//!
//! Die Key-Namen sind bitgenau festgelegt, damit bestehende Einstellungen
//! kompatibel bleiben.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Orientierung (0 = Portrait, 1 = Landscape).
pub const KEY_SCREEN_ORIENT: &str = "Rocket/ScreenOrient";
/// Breite der Render-Fläche in Pixel.
pub const KEY_SCREEN_WIDTH: &str = "Rocket/ScreenWidth";
/// Höhe der Render-Fläche in Pixel.
pub const KEY_SCREEN_HEIGHT: &str = "Rocket/ScreenHeight";

/// Port zum Einstellungs-Speicher.
pub trait PreferenceStore {
    /// Liest einen Integer-Wert, `default` wenn nicht gesetzt.
    fn get_int(&self, key: &str, default: i64) -> i64;

    /// Schreibt einen Integer-Wert.
    fn set_int(&mut self, key: &str, value: i64);
}

/// In-Memory-Speicher; zählt Schreibzugriffe.
///
/// Klone teilen sich denselben Inhalt, damit ein Test den an den Controller
/// übergebenen Speicher weiter beobachten kann.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: BTreeMap<String, i64>,
    writes: usize,
}

impl MemoryPreferences {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl bisheriger `set_int`-Aufrufe.
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    /// Direkter Lesezugriff ohne Default.
    pub fn value(&self, key: &str) -> Option<i64> {
        self.inner.borrow().values.get(key).copied()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.value(key).unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        let mut inner = self.inner.borrow_mut();
        inner.values.insert(key.to_string(), value);
        inner.writes += 1;
    }
}

/// TOML-Datei-basierter Speicher; schreibt bei jedem `set_int` durch.
#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl TomlPreferences {
    /// Lädt die Datei. Fehlt sie oder ist sie fehlerhaft, startet der Speicher leer.
    pub fn load_from_file(path: &Path) -> Self {
        let values = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<BTreeMap<String, i64>>(&content) {
                Ok(values) => {
                    log::info!("Einstellungen geladen aus: {}", path.display());
                    values
                }
                Err(e) => {
                    log::warn!("Einstellungs-Datei fehlerhaft, starte leer: {}", e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    fn save(&self) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferences {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            log::warn!(
                "Einstellung {} konnte nicht gespeichert werden ({}): {:#}",
                key,
                self.path.display(),
                e
            );
        }
    }
}
