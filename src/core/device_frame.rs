//! Geräte-Rahmen-Katalog: feste, geordnete Tabelle simulierter Zielbildschirme.
//!
//! Der Index eines Eintrags ist stabil und wird von Menü- und Toolbar-Aktionen
//! als Referenz verwendet.

use super::error::ViewerError;

/// Ein Geräteprofil mit Pixelmaßen und Rahmen-Artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFrameEntry {
    /// Referenz auf das Rahmen-Bild (relativer Asset-Pfad)
    pub artwork: &'static str,
    /// Als Eintrag im Dimension-Menü verfügbar
    pub is_tool_variant: bool,
    /// Als Toolbar-Shortcut verfügbar
    pub is_toolbar_shortcut: bool,
    /// Breite in Pixel (> 0)
    pub width: u32,
    /// Höhe in Pixel (> 0)
    pub height: u32,
    /// Optionales Anzeige-Label (z.B. "iPad")
    pub label: Option<&'static str>,
}

impl DeviceFrameEntry {
    const fn new(
        artwork: &'static str,
        is_tool_variant: bool,
        is_toolbar_shortcut: bool,
        width: u32,
        height: u32,
        label: Option<&'static str>,
    ) -> Self {
        Self {
            artwork,
            is_tool_variant,
            is_toolbar_shortcut,
            width,
            height,
            label,
        }
    }

    /// Einzeiliger Anzeigetext, z.B. `"320x480 (Android)"`.
    pub fn display_label(&self) -> String {
        match self.label {
            Some(label) => format!("{}x{} ({})", self.width, self.height, label),
            None => format!("{}x{}", self.width, self.height),
        }
    }

    /// Zweizeiliger Anzeigetext für schmale Toolbar-Buttons.
    pub fn two_line_label(&self) -> String {
        match self.label {
            Some(label) => format!("{}x{}\n({})", self.width, self.height, label),
            None => format!("{}x{}", self.width, self.height),
        }
    }
}

/// Alle verfügbaren Geräte-Rahmen in stabiler Reihenfolge.
pub const DEVICE_FRAMES: [DeviceFrameEntry; 16] = [
    DeviceFrameEntry::new("res/frame-android-xsmall.png", true, false, 320, 480, Some("Android")),
    DeviceFrameEntry::new("res/frame-android-small.png", true, false, 480, 640, Some("Android VGA")),
    DeviceFrameEntry::new("res/frame-android-medium.png", true, false, 480, 854, Some("Android FWVGA")),
    DeviceFrameEntry::new("res/frame-iphone.png", true, false, 320, 480, Some("iPhone3")),
    DeviceFrameEntry::new("res/frame-monitor.png", false, true, 800, 480, Some("WVGA ")),
    DeviceFrameEntry::new("res/frame-monitor.png", true, false, 800, 600, None),
    DeviceFrameEntry::new("res/frame-iphone.png", true, true, 640, 960, Some("iPhone4")),
    DeviceFrameEntry::new("res/frame-iphone5.png", true, true, 1136, 640, Some("iPhone5")),
    DeviceFrameEntry::new("res/frame-ipad.png", true, true, 768, 1024, Some("iPad")),
    DeviceFrameEntry::new("res/frame-monitor.png", false, false, 1024, 768, None),
    DeviceFrameEntry::new("res/frame-playbook.png", true, true, 1024, 600, Some("Playbook")),
    DeviceFrameEntry::new("res/frame-z10.png", true, true, 768, 1280, Some("BB Z10")),
    DeviceFrameEntry::new("res/frame-monitor.png", false, false, 1280, 720, None),
    DeviceFrameEntry::new("res/frame-monitor.png", false, false, 1600, 1024, None),
    DeviceFrameEntry::new("res/frame-monitor.png", true, false, 1920, 1080, Some("HD")),
    DeviceFrameEntry::new("res/frame-ipad.png", true, false, 1536, 2048, Some("iPad3")),
];

/// Liefert den Katalog-Eintrag zum Index.
pub fn frame_at(index: usize) -> Result<&'static DeviceFrameEntry, ViewerError> {
    DEVICE_FRAMES
        .get(index)
        .ok_or(ViewerError::InvalidFrameIndex {
            index,
            len: DEVICE_FRAMES.len(),
        })
}

/// Index und Eintrag aller Rahmen, die im Dimension-Menü erscheinen.
pub fn tool_frames() -> impl Iterator<Item = (usize, &'static DeviceFrameEntry)> {
    DEVICE_FRAMES
        .iter()
        .enumerate()
        .filter(|(_, frame)| frame.is_tool_variant)
}

/// Index und Eintrag aller Rahmen mit Toolbar-Shortcut.
pub fn toolbar_frames() -> impl Iterator<Item = (usize, &'static DeviceFrameEntry)> {
    DEVICE_FRAMES
        .iter()
        .enumerate()
        .filter(|(_, frame)| frame.is_toolbar_shortcut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_frames_have_positive_dimensions() {
        for frame in &DEVICE_FRAMES {
            assert!(frame.width > 0 && frame.height > 0, "{frame:?}");
        }
    }

    #[test]
    fn display_label_appends_optional_label() {
        assert_eq!(DEVICE_FRAMES[0].display_label(), "320x480 (Android)");
        assert_eq!(DEVICE_FRAMES[5].display_label(), "800x600");
        assert_eq!(DEVICE_FRAMES[8].two_line_label(), "768x1024\n(iPad)");
    }

    #[test]
    fn frame_at_rejects_out_of_range_index() {
        assert!(frame_at(15).is_ok());
        let err = frame_at(16).expect_err("Index 16 liegt außerhalb");
        assert!(matches!(
            err,
            ViewerError::InvalidFrameIndex { index: 16, len: 16 }
        ));
    }

    #[test]
    fn toolbar_filter_keeps_catalog_order() {
        let indices: Vec<usize> = toolbar_frames().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![4, 6, 7, 8, 10, 11]);
    }
}
