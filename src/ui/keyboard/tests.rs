use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(
    event: egui::Event,
    modifiers: egui::Modifiers,
    has_document: bool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput {
        modifiers,
        ..Default::default()
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        events = collect_keyboard_intents(ctx, has_document);
    });

    events
}

#[test]
fn test_escape_toggles_log_panel() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        egui::Modifiers::default(),
        false,
    );

    assert_eq!(events, vec![AppIntent::LogPanelToggled]);
}

#[test]
fn test_ctrl_o_requests_open_dialog() {
    let events = collect_with_key_event(
        key_event(egui::Key::O, egui::Modifiers::COMMAND),
        egui::Modifiers::COMMAND,
        false,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::OpenFileRequested)));
}

#[test]
fn test_f5_reloads_only_with_document() {
    let without = collect_with_key_event(
        key_event(egui::Key::F5, egui::Modifiers::default()),
        egui::Modifiers::default(),
        false,
    );
    let with = collect_with_key_event(
        key_event(egui::Key::F5, egui::Modifiers::default()),
        egui::Modifiers::default(),
        true,
    );

    assert!(without.is_empty());
    assert_eq!(with, vec![AppIntent::ReloadRequested]);
}

#[test]
fn test_ctrl_zero_resets_zoom() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num0, egui::Modifiers::COMMAND),
        egui::Modifiers::COMMAND,
        false,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ResetZoomRequested)));
}
