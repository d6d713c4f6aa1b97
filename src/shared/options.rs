//! Zentrale Konfiguration für den RML Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Bildschirm ──────────────────────────────────────────────────────

/// Start-Breite, wenn noch keine Preference gespeichert ist.
pub const DEFAULT_SCREEN_WIDTH: u32 = 1024;
/// Start-Höhe, wenn noch keine Preference gespeichert ist.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 768;

// ── Status & Log ────────────────────────────────────────────────────

/// Anzeigedauer transienter Statusnachrichten in Millisekunden.
pub const STATUS_MESSAGE_TIMEOUT_MS: u64 = 2500;
/// Maximale Anzahl Zeilen in der Log-Tabelle.
pub const LOG_CAPACITY: usize = 500;

// ── Zoom ────────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor der Vorschau.
pub const ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor der Vorschau.
pub const ZOOM_MAX: f32 = 8.0;
/// Zoom-Schritt für Zoom-In/Out.
pub const ZOOM_STEP: f32 = 1.25;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `rml_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    /// Breite ohne gespeicherte Preference
    pub default_screen_width: u32,
    /// Höhe ohne gespeicherte Preference
    pub default_screen_height: u32,
    /// Anzeigedauer von Statusnachrichten (ms)
    pub status_message_timeout_ms: u64,
    /// Zeilenlimit der Log-Tabelle
    pub log_capacity: usize,
    /// Minimaler Zoom
    pub zoom_min: f32,
    /// Maximaler Zoom
    pub zoom_max: f32,
    /// Zoom-Schritt
    pub zoom_step: f32,
    /// Render-Fläche folgt der Größe des Vorschaubereichs
    #[serde(default)]
    pub follow_window_size: bool,
    /// Debugger-Overlay beim Start einblenden
    #[serde(default)]
    pub show_debugger_on_start: bool,
    /// Dateiname der Preference-Datei (relativ zur Binary)
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            default_screen_width: DEFAULT_SCREEN_WIDTH,
            default_screen_height: DEFAULT_SCREEN_HEIGHT,
            status_message_timeout_ms: STATUS_MESSAGE_TIMEOUT_MS,
            log_capacity: LOG_CAPACITY,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            follow_window_size: false,
            show_debugger_on_start: false,
            preferences_file: default_preferences_file(),
        }
    }
}

/// Serde-Default für `preferences_file` (Abwärtskompatibilität).
fn default_preferences_file() -> String {
    "rml_viewer_prefs.toml".to_string()
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::beside_binary("rml_viewer.toml")
    }

    /// Ermittelt den Pfad zur Preference-Datei neben der Binary.
    pub fn preferences_path(&self) -> std::path::PathBuf {
        Self::beside_binary(&self.preferences_file)
    }

    fn beside_binary(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rml_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }

    /// Begrenzt einen Zoom-Wert auf `[zoom_min, zoom_max]`.
    pub fn clamp_zoom(&self, level: f32) -> f32 {
        // kein f32::clamp: eine verdrehte Konfiguration darf nicht paniken
        level.max(self.zoom_min).min(self.zoom_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let options = ViewerOptions {
            follow_window_size: true,
            zoom_step: 2.0,
            ..ViewerOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: ViewerOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let text = r#"
            default_screen_width = 640
            default_screen_height = 960
            status_message_timeout_ms = 1000
            log_capacity = 10
            zoom_min = 0.5
            zoom_max = 4.0
            zoom_step = 1.5
        "#;
        let parsed: ViewerOptions = toml::from_str(text).expect("parsebar");
        assert!(!parsed.follow_window_size);
        assert_eq!(parsed.preferences_file, "rml_viewer_prefs.toml");
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("rml_viewer_test_broken_options.toml");
        std::fs::write(&path, "zoom_min = [").expect("Datei schreiben");
        assert_eq!(ViewerOptions::load_from_file(&path), ViewerOptions::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn clamp_zoom_respects_bounds() {
        let options = ViewerOptions::default();
        approx::assert_relative_eq!(options.clamp_zoom(100.0), ZOOM_MAX);
        approx::assert_relative_eq!(options.clamp_zoom(0.0), ZOOM_MIN);
        approx::assert_relative_eq!(options.clamp_zoom(1.0), 1.0);
    }
}
