//! Bildschirmgrößen-Controller: orientierte Größe, Änderungserkennung, Persistenz.

use crate::core::{canonical_size, Orientation, ScreenConfiguration};
use crate::shared::{
    PreferenceStore, ViewerOptions, KEY_SCREEN_HEIGHT, KEY_SCREEN_ORIENT, KEY_SCREEN_WIDTH,
};

/// Besitzt die aktuelle `ScreenConfiguration`.
///
/// Änderungen laufen ausschließlich über `apply`; nur eine geänderte
/// effektive Größe wird als Änderung gemeldet.
#[derive(Debug, Clone)]
pub struct ScreenDimensionController {
    config: ScreenConfiguration,
}

impl Default for ScreenDimensionController {
    fn default() -> Self {
        Self::new(ScreenConfiguration::default())
    }
}

impl ScreenDimensionController {
    /// Erstellt den Controller mit einer Startkonfiguration.
    pub fn new(config: ScreenConfiguration) -> Self {
        Self {
            config: ScreenConfiguration::oriented(config.width, config.height, config.orientation),
        }
    }

    /// Initialisiert aus gespeicherten Einstellungen (Fallback: Options-Defaults).
    pub fn from_preferences(prefs: &dyn PreferenceStore, options: &ViewerOptions) -> Self {
        let orientation = Orientation::from_pref_value(prefs.get_int(KEY_SCREEN_ORIENT, 0));
        let width = pref_dimension(prefs, KEY_SCREEN_WIDTH, options.default_screen_width);
        let height = pref_dimension(prefs, KEY_SCREEN_HEIGHT, options.default_screen_height);
        let config = ScreenConfiguration::oriented(width, height, orientation);
        log::info!(
            "Bildschirm aus Einstellungen: {}x{} ({})",
            config.width,
            config.height,
            orientation.label()
        );
        Self { config }
    }

    /// Aktuelle Konfiguration.
    pub fn config(&self) -> ScreenConfiguration {
        self.config
    }

    /// Aktuelle Orientierung.
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Orientiert das Paar und übernimmt es, wenn sich die effektive Größe ändert.
    ///
    /// Gibt die neue Konfiguration zurück, sonst `None`. Bei unveränderter
    /// Größe wird nur die Orientierung nachgeführt.
    pub fn apply(
        &mut self,
        width: u32,
        height: u32,
        orientation: Orientation,
    ) -> Option<ScreenConfiguration> {
        let (width, height) = canonical_size(width.max(1), height.max(1), orientation);
        if self.config.same_size(width, height) {
            self.config.orientation = orientation;
            return None;
        }

        self.config = ScreenConfiguration {
            width,
            height,
            orientation,
        };
        Some(self.config)
    }

    /// Schreibt Breite und Höhe in die Einstellungen.
    pub fn persist_size(&self, prefs: &mut dyn PreferenceStore) {
        prefs.set_int(KEY_SCREEN_WIDTH, i64::from(self.config.width));
        prefs.set_int(KEY_SCREEN_HEIGHT, i64::from(self.config.height));
    }
}

fn pref_dimension(prefs: &dyn PreferenceStore, key: &str, default: u32) -> u32 {
    let value = prefs.get_int(key, i64::from(default));
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MemoryPreferences;

    #[test]
    fn apply_reports_change_only_once() {
        let mut screen = ScreenDimensionController::default();
        let first = screen.apply(320, 480, Orientation::Portrait);
        assert_eq!(
            first,
            Some(ScreenConfiguration {
                width: 320,
                height: 480,
                orientation: Orientation::Portrait
            })
        );
        assert_eq!(screen.apply(320, 480, Orientation::Portrait), None);
        // gleiches Rechteck, andere Reihenfolge
        assert_eq!(screen.apply(480, 320, Orientation::Portrait), None);
    }

    #[test]
    fn orientation_flip_on_square_only_updates_orientation() {
        let mut screen =
            ScreenDimensionController::new(ScreenConfiguration::oriented(600, 600, Orientation::Portrait));
        assert_eq!(screen.apply(600, 600, Orientation::Landscape), None);
        assert_eq!(screen.orientation(), Orientation::Landscape);
    }

    #[test]
    fn from_preferences_orients_stored_size() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_int(KEY_SCREEN_ORIENT, 1);
        prefs.set_int(KEY_SCREEN_WIDTH, 320);
        prefs.set_int(KEY_SCREEN_HEIGHT, 480);

        let screen = ScreenDimensionController::from_preferences(&prefs, &ViewerOptions::default());

        assert_eq!(
            screen.config(),
            ScreenConfiguration {
                width: 480,
                height: 320,
                orientation: Orientation::Landscape
            }
        );
    }

    #[test]
    fn from_preferences_rejects_invalid_values() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_int(KEY_SCREEN_WIDTH, -5);
        prefs.set_int(KEY_SCREEN_HEIGHT, 0);
        let options = ViewerOptions::default();

        let screen = ScreenDimensionController::from_preferences(&prefs, &options);

        assert_eq!(screen.config().width, options.default_screen_height.min(options.default_screen_width));
        assert_eq!(screen.config().height, options.default_screen_height.max(options.default_screen_width));
    }

    #[test]
    fn persist_size_writes_both_keys() {
        let mut prefs = MemoryPreferences::new();
        let screen =
            ScreenDimensionController::new(ScreenConfiguration::oriented(640, 960, Orientation::Portrait));
        screen.persist_size(&mut prefs);
        assert_eq!(prefs.value(KEY_SCREEN_WIDTH), Some(640));
        assert_eq!(prefs.value(KEY_SCREEN_HEIGHT), Some(960));
        assert_eq!(prefs.write_count(), 2);
    }
}
