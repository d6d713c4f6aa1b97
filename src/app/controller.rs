//! Application Controller für zentrale Event-Verarbeitung.

use super::context::ViewerContext;
use super::{AppCommand, AppIntent, AppState};
use crate::engine::RenderingEngine;

/// Orchestriert externe Ereignisse (UI, Dateiüberwachung, Kommandozeile)
/// auf den AppState. Besitzt die Ports zu Engine und Einstellungen.
pub struct AppController {
    context: ViewerContext,
}

impl AppController {
    /// Erstellt einen neuen Controller über dem übergebenen Kontext.
    pub fn new(context: ViewerContext) -> Self {
        Self { context }
    }

    /// Lesezugriff auf die Engine (Vorschau, Element-Baum).
    pub fn engine(&self) -> &dyn RenderingEngine {
        self.context.engine.as_ref()
    }

    /// Lesezugriff auf den Kontext.
    pub fn context(&self) -> &ViewerContext {
        &self.context
    }

    /// Überträgt die Start-Konfiguration auf Render-Fläche und Debugger.
    pub fn startup(&mut self, state: &mut AppState) {
        super::handlers::screen::startup(state, &mut self.context);
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;
        let ctx = &mut self.context;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::OpenDocument { path } => handlers::file_io::open(state, ctx, path)?,
            AppCommand::ReloadDocument => handlers::file_io::reload(state, ctx)?,
            AppCommand::ReloadChangedFile { path } => {
                handlers::file_io::reload_changed_file(state, ctx, &path)
            }
            AppCommand::RequestExit => handlers::file_io::request_exit(state),

            // === Selektion & Tools ===
            AppCommand::DispatchElementClick { element } => {
                handlers::selection::dispatch_element_click(state, ctx, element)
            }
            AppCommand::ClearSelection => handlers::selection::clear_selection(state),
            AppCommand::SetCurrentTool { id } => handlers::selection::set_current_tool(state, id)?,

            // === Bildschirm ===
            AppCommand::SetScreenSize {
                width,
                height,
                orientation,
            } => handlers::screen::select_screen_size(state, ctx, width, height, orientation),
            AppCommand::ChangeOrientation { orientation } => {
                handlers::screen::change_orientation(state, ctx, orientation)
            }
            AppCommand::ResizeRenderSurface { width, height } => {
                handlers::screen::resize_render_surface(state, ctx, width, height)
            }
            AppCommand::SetFollowWindowSize { enabled } => {
                handlers::screen::set_follow_window_size(state, ctx, enabled)
            }

            // === View ===
            AppCommand::SetPreviewSize { width, height } => {
                handlers::view::set_preview_size(state, width, height)
            }
            AppCommand::ShowPointerPosition { position } => {
                handlers::view::show_pointer_position(state, position)
            }
            AppCommand::SetZoomLevel { level } => handlers::view::set_zoom_level(state, level),
            AppCommand::ToggleDebugger => handlers::view::toggle_debugger(state, ctx),
            AppCommand::ToggleLogPanel => handlers::view::toggle_log_panel(state),
        }

        Ok(())
    }
}
