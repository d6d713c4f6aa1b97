//! Application-Layer: Controller, State, Events, Tools und Dokument-Session.

pub mod command_log;
pub mod context;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod log_table;
pub mod screen;
pub mod selection;
pub mod session;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, View, Tools).
pub mod state;
pub mod tools;
pub mod watcher;

pub use command_log::CommandLog;
pub use context::ViewerContext;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use log_table::{LogRow, LogTable};
pub use screen::ScreenDimensionController;
pub use selection::{DocumentView, SelectionState};
pub use session::{DocumentSession, SessionState};
pub use state::{AppState, StatusMessage, UiState, ViewState};
pub use tools::{ElementSummary, InspectTool, SelectTool, Tool, ToolAction, ToolId, ToolManager};
pub use watcher::{drain_changed_paths, LiveReloadWatcher, PathWatcher, Waker};
