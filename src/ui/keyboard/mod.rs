//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context, has_document: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_o, key_r, key_f5, key_escape) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::F5),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o {
        events.push(AppIntent::OpenFileRequested);
    }

    if has_document && (key_f5 || (modifiers.command && key_r)) {
        events.push(AppIntent::ReloadRequested);
    }

    // Escape blendet das Log-Panel ein/aus
    if key_escape {
        events.push(AppIntent::LogPanelToggled);
    }

    let (key_plus, key_minus, key_zero) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
        )
    });

    if modifiers.command && key_plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if modifiers.command && key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }
    if modifiers.command && key_zero {
        events.push(AppIntent::ResetZoomRequested);
    }

    events
}

#[cfg(test)]
mod tests;
