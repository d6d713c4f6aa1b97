//! Core-Domänentypen: Geräte-Rahmen, Bildschirm-Konfiguration, Dokumente, Fehler.

pub mod device_frame;
pub mod document;
/// Element-Arena eines geparsten Dokuments
pub mod element;
pub mod error;
pub mod screen;

pub use device_frame::{frame_at, tool_frames, toolbar_frames, DeviceFrameEntry, DEVICE_FRAMES};
pub use document::{DocumentGeneration, DocumentHandle, ElementRef, OpenedDocument};
pub use element::{ElementId, ElementNode, ElementTree};
pub use error::{LoadError, ViewerError};
pub use screen::{canonical_size, Orientation, ScreenConfiguration};
