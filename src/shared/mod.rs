//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und den Einstellungs-Port, die von `app`, `ui` und
//! dem Host gemeinsam genutzt werden.

pub mod options;
pub mod preferences;

pub use options::ViewerOptions;
pub use preferences::{
    MemoryPreferences, PreferenceStore, TomlPreferences, KEY_SCREEN_HEIGHT, KEY_SCREEN_ORIENT,
    KEY_SCREEN_WIDTH,
};
