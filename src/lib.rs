//! RML Viewer Library.
//! Koordinationsschicht (Tools, Selektion, Bildschirmgröße, Dokument-Session)
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod engine;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DocumentSession, ScreenDimensionController,
    SelectionState, SessionState, ToolManager, UiState, ViewState, ViewerContext,
};
pub use core::{
    DeviceFrameEntry, DocumentGeneration, ElementId, ElementRef, ElementTree, LoadError,
    Orientation, ScreenConfiguration, ViewerError, DEVICE_FRAMES,
};
pub use engine::{HeadlessEngine, RenderingEngine, ResourceResolver, SearchPaths};
pub use shared::{MemoryPreferences, PreferenceStore, TomlPreferences, ViewerOptions};
