//! Bildschirm-Konfiguration und orientierungsabhängige Achsen-Ordnung.

/// Ausrichtung des simulierten Bildschirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Hochformat: Breite ≤ Höhe
    #[default]
    Portrait,
    /// Querformat: Breite ≥ Höhe
    Landscape,
}

impl Orientation {
    /// Wert für den Preference-Key (0 = Portrait, 1 = Landscape).
    pub fn to_pref_value(self) -> i64 {
        match self {
            Orientation::Portrait => 0,
            Orientation::Landscape => 1,
        }
    }

    /// Liest eine Orientierung aus dem Preference-Wert.
    /// Unbekannte Werte fallen auf Portrait zurück.
    pub fn from_pref_value(value: i64) -> Self {
        if value == 1 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Die jeweils andere Orientierung.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// Anzeigename für Toolbar und Log.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

/// Ordnet ein Breite/Höhe-Paar passend zur Orientierung.
///
/// Landscape tauscht, wenn die Höhe größer ist; Portrait tauscht, wenn die
/// Breite größer ist.
pub fn canonical_size(width: u32, height: u32, orientation: Orientation) -> (u32, u32) {
    match orientation {
        Orientation::Landscape if height > width => (height, width),
        Orientation::Portrait if width > height => (height, width),
        _ => (width, height),
    }
}

/// Aktuelle Größe und Ausrichtung des Render-Bereichs (eine Instanz pro Prozess).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfiguration {
    /// Breite in Pixel (bereits orientiert)
    pub width: u32,
    /// Höhe in Pixel (bereits orientiert)
    pub height: u32,
    /// Ausrichtung
    pub orientation: Orientation,
}

impl ScreenConfiguration {
    /// Erstellt eine Konfiguration mit kanonisch geordneten Achsen.
    /// Nullwerte werden auf 1 angehoben.
    pub fn oriented(width: u32, height: u32, orientation: Orientation) -> Self {
        let (width, height) = canonical_size(width.max(1), height.max(1), orientation);
        Self {
            width,
            height,
            orientation,
        }
    }

    /// Gibt `true` zurück, wenn das Paar dieselbe effektive Größe beschreibt.
    pub fn same_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }
}

impl Default for ScreenConfiguration {
    fn default() -> Self {
        Self::oriented(
            crate::shared::options::DEFAULT_SCREEN_WIDTH,
            crate::shared::options::DEFAULT_SCREEN_HEIGHT,
            Orientation::Portrait,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn landscape_swaps_tall_pair() {
        assert_eq!(canonical_size(320, 480, Orientation::Landscape), (480, 320));
        assert_eq!(canonical_size(480, 320, Orientation::Landscape), (480, 320));
    }

    #[test]
    fn portrait_swaps_wide_pair() {
        assert_eq!(canonical_size(1136, 640, Orientation::Portrait), (640, 1136));
        assert_eq!(canonical_size(640, 1136, Orientation::Portrait), (640, 1136));
    }

    #[test]
    fn square_is_unchanged_in_both_orientations() {
        assert_eq!(canonical_size(500, 500, Orientation::Portrait), (500, 500));
        assert_eq!(canonical_size(500, 500, Orientation::Landscape), (500, 500));
    }

    #[test]
    fn pref_value_roundtrip_falls_back_to_portrait() {
        assert_eq!(Orientation::from_pref_value(1), Orientation::Landscape);
        assert_eq!(Orientation::from_pref_value(0), Orientation::Portrait);
        assert_eq!(Orientation::from_pref_value(7), Orientation::Portrait);
    }

    #[test]
    fn oriented_lifts_zero_dimensions() {
        let config = ScreenConfiguration::oriented(0, 0, Orientation::Portrait);
        assert_eq!((config.width, config.height), (1, 1));
    }

    proptest! {
        #[test]
        fn canonical_pair_respects_orientation(
            width in 1u32..10_000,
            height in 1u32..10_000,
            landscape in any::<bool>(),
        ) {
            let orientation = if landscape { Orientation::Landscape } else { Orientation::Portrait };
            let (w, h) = canonical_size(width, height, orientation);

            match orientation {
                Orientation::Landscape => prop_assert!(w >= h),
                Orientation::Portrait => prop_assert!(w <= h),
            }
            // gleiches physisches Rechteck
            prop_assert_eq!(w.min(h), width.min(height));
            prop_assert_eq!(w.max(h), width.max(height));
        }
    }
}
