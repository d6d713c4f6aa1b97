//! Handler für Klick-Routing, Selektion und Tool-Wechsel.

use crate::app::context::ViewerContext;
use crate::app::selection::is_debugger_control;
use crate::app::tools::{ToolAction, ToolId};
use crate::app::AppState;
use crate::core::ElementId;

/// Reicht einen Element-Klick an das aktive Tool weiter und setzt je nach
/// Tool-Antwort die Selektion.
pub fn dispatch_element_click(state: &mut AppState, ctx: &mut ViewerContext, element: ElementId) {
    let Some(view) = state.session.view(ctx.engine.as_ref()) else {
        log::debug!("Klick auf {:?} ohne geöffnetes Dokument ignoriert", element);
        return;
    };

    let debugger_visible = ctx.engine.debugger_visible();
    if is_debugger_control(view.tree, element, debugger_visible) {
        log::debug!("Klick auf Debugger-Element {:?} ignoriert", element);
        return;
    }

    match state.tools.dispatch_element_clicked(element, view.tree) {
        ToolAction::SelectElement => {
            if state
                .selection
                .select(Some(view), element, debugger_visible)
            {
                state.view.request_repaint();
            }
        }
        ToolAction::ClearSelection => {
            state.selection.clear(&mut state.tools);
            state.view.request_repaint();
        }
        ToolAction::Ignore => {}
    }
}

/// Hebt die Selektion auf. Ohne geöffnetes Dokument passiert nichts.
pub fn clear_selection(state: &mut AppState) {
    if !state.session.is_open() {
        return;
    }
    state.selection.clear(&mut state.tools);
    state.view.request_repaint();
}

/// Wechselt das aktive Tool.
pub fn set_current_tool(state: &mut AppState, id: ToolId) -> anyhow::Result<()> {
    if state.tools.set_current_tool(id)? {
        state.ui.log.push(&format!("Tool;{}", state.tools.current_tool().name()));
        state.view.request_repaint();
    }
    Ok(())
}
