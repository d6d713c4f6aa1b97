//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::frame_at;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::OpenDocument { path }],
        AppIntent::ReloadRequested => vec![AppCommand::ReloadDocument],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileChanged { path } => {
            let watched = state
                .session
                .current()
                .is_some_and(|doc| doc.is_source(&path));
            if watched {
                vec![AppCommand::ReloadChangedFile { path }]
            } else {
                log::debug!("Änderung an {} ignoriert (nicht geöffnet)", path.display());
                vec![]
            }
        }
        AppIntent::PointerMoved { position } => {
            vec![AppCommand::ShowPointerPosition { position }]
        }
        AppIntent::ElementClicked { element } => {
            vec![AppCommand::DispatchElementClick { element }]
        }
        AppIntent::UnselectRequested => vec![AppCommand::ClearSelection],
        AppIntent::ToolSelected { id } => vec![AppCommand::SetCurrentTool { id }],
        AppIntent::FrameSelected { index } => match frame_at(index) {
            Ok(entry) => vec![AppCommand::SetScreenSize {
                width: entry.width,
                height: entry.height,
                orientation: None,
            }],
            Err(e) => {
                log::warn!("{}", e);
                vec![]
            }
        },
        AppIntent::OrientationSelected { orientation } => {
            vec![AppCommand::ChangeOrientation { orientation }]
        }
        AppIntent::PreviewAreaResized { width, height } => {
            let mut commands = vec![AppCommand::SetPreviewSize { width, height }];
            if state.ui.follow_window_size && width > 0 && height > 0 {
                commands.push(AppCommand::ResizeRenderSurface { width, height });
            }
            commands
        }
        AppIntent::FollowWindowSizeToggled { enabled } => {
            let mut commands = vec![AppCommand::SetFollowWindowSize { enabled }];
            let [w, h] = state.view.preview_size;
            if enabled && w >= 1.0 && h >= 1.0 {
                commands.push(AppCommand::ResizeRenderSurface {
                    width: w as u32,
                    height: h as u32,
                });
            }
            commands
        }
        AppIntent::ZoomInRequested => vec![AppCommand::SetZoomLevel {
            level: state.view.zoom_level * state.options.zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::SetZoomLevel {
            level: state.view.zoom_level / state.options.zoom_step,
        }],
        AppIntent::ZoomChanged { level } => vec![AppCommand::SetZoomLevel { level }],
        AppIntent::ResetZoomRequested => vec![AppCommand::SetZoomLevel { level: 1.0 }],
        AppIntent::DebuggerToggled => vec![AppCommand::ToggleDebugger],
        AppIntent::LogPanelToggled => vec![AppCommand::ToggleLogPanel],
    }
}
