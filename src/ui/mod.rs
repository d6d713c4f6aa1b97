//! UI-Layer mit egui.
//!
//! Alle Komponenten lesen den `AppState` und liefern `AppIntent`s zurück;
//! mutiert wird ausschließlich im Controller.

pub mod dialogs;
mod keyboard;
pub mod log_panel;
pub mod menu;
pub mod preview;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use keyboard::collect_keyboard_intents;
pub use log_panel::render_log_panel;
pub use menu::render_menu;
pub use preview::render_preview;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
