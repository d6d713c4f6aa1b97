mod common;

use common::{temp_document, Harness, SAMPLE};
use rml_viewer::shared::{KEY_SCREEN_HEIGHT, KEY_SCREEN_ORIENT, KEY_SCREEN_WIDTH};
use rml_viewer::{AppCommand, AppIntent, Orientation, RenderingEngine, ScreenConfiguration};

fn opened(dir: &str) -> Harness {
    let mut h = Harness::new();
    let path = temp_document(dir, "demo.rml", SAMPLE);
    h.send(AppIntent::FileSelected { path }).expect("Öffnen");
    h
}

#[test]
fn test_startup_pushes_configuration_to_render_surface() {
    let h = Harness::new();

    assert_eq!(
        h.state.screen.config(),
        ScreenConfiguration::oriented(768, 1024, Orientation::Portrait)
    );
    assert_eq!(h.controller.engine().context_size(), (768, 1024));
    assert_eq!(h.state.view.context_size, (768, 1024));
    assert_eq!(h.prefs.write_count(), 0);
}

#[test]
fn test_same_frame_twice_reloads_and_persists_once() {
    let mut h = opened("frame_twice");
    let generation = h.generation().expect("Generation");

    h.send(AppIntent::FrameSelected { index: 0 }).expect("Rahmen");
    h.send(AppIntent::FrameSelected { index: 0 }).expect("Rahmen");

    assert_eq!(h.generation(), Some(generation + 1));
    assert_eq!(h.prefs.write_count(), 2);
    assert_eq!(h.prefs.value(KEY_SCREEN_WIDTH), Some(320));
    assert_eq!(h.prefs.value(KEY_SCREEN_HEIGHT), Some(480));
    assert_eq!(h.controller.engine().context_size(), (320, 480));
    let doc = h.state.session.current().expect("Dokument");
    assert_eq!((doc.loaded_at.width, doc.loaded_at.height), (320, 480));
}

#[test]
fn test_frame_selection_shows_status_and_log_row() {
    let mut h = Harness::new();

    h.send(AppIntent::FrameSelected { index: 6 }).expect("Rahmen");

    let status = &h.state.ui.status_message.as_ref().expect("Status").text;
    assert_eq!(status, "Screen: 640x960");
    let row = h.state.ui.log.last().expect("Log-Zeile");
    assert_eq!(row.fields, vec!["Screen", "640x960", "Portrait"]);
    assert!(h.state.view.repaint_requested());
}

#[test]
fn test_frame_is_ordered_by_current_orientation() {
    let mut h = Harness::new();

    // iPhone5 ist als 1136x640 katalogisiert
    h.send(AppIntent::FrameSelected { index: 7 }).expect("Rahmen");

    assert_eq!(
        h.state.screen.config(),
        ScreenConfiguration::oriented(640, 1136, Orientation::Portrait)
    );
    assert_eq!(h.controller.engine().context_size(), (640, 1136));
}

#[test]
fn test_orientation_toggle_on_square_does_not_reload() {
    let mut h = opened("square_toggle");
    h.command(AppCommand::SetScreenSize {
        width: 600,
        height: 600,
        orientation: None,
    })
    .expect("Größe");
    let generation = h.generation();
    let writes = h.prefs.write_count();

    h.send(AppIntent::OrientationSelected {
        orientation: Orientation::Landscape,
    })
    .expect("Orientierung");

    assert_eq!(h.generation(), generation);
    assert_eq!(h.state.screen.orientation(), Orientation::Landscape);
    assert_eq!(h.prefs.value(KEY_SCREEN_ORIENT), Some(1));
    assert_eq!(h.prefs.write_count(), writes + 1);
    assert_eq!(h.controller.engine().context_size(), (600, 600));
}

#[test]
fn test_orientation_change_reorders_surface_and_reloads() {
    let mut h = opened("orientation_change");
    let generation = h.generation().expect("Generation");

    h.send(AppIntent::OrientationSelected {
        orientation: Orientation::Landscape,
    })
    .expect("Orientierung");

    assert_eq!(
        h.state.screen.config(),
        ScreenConfiguration::oriented(1024, 768, Orientation::Landscape)
    );
    assert_eq!(h.controller.engine().context_size(), (1024, 768));
    assert_eq!(h.generation(), Some(generation + 1));
    assert_eq!(h.prefs.value(KEY_SCREEN_ORIENT), Some(1));
    assert_eq!(h.prefs.value(KEY_SCREEN_WIDTH), Some(1024));
    assert_eq!(h.prefs.value(KEY_SCREEN_HEIGHT), Some(768));
}

#[test]
fn test_same_orientation_is_not_persisted_again() {
    let mut h = Harness::new();

    h.send(AppIntent::OrientationSelected {
        orientation: Orientation::Portrait,
    })
    .expect("Orientierung");

    assert_eq!(h.prefs.value(KEY_SCREEN_ORIENT), None);
    assert_eq!(h.prefs.write_count(), 0);
}

#[test]
fn test_explicit_size_with_orientation_switch() {
    let mut h = Harness::new();

    h.command(AppCommand::SetScreenSize {
        width: 320,
        height: 480,
        orientation: Some(Orientation::Portrait),
    })
    .expect("Größe");
    assert_eq!(
        h.state.screen.config(),
        ScreenConfiguration::oriented(320, 480, Orientation::Portrait)
    );

    h.command(AppCommand::SetScreenSize {
        width: 480,
        height: 320,
        orientation: Some(Orientation::Landscape),
    })
    .expect("Größe");
    assert_eq!(
        h.state.screen.config(),
        ScreenConfiguration::oriented(480, 320, Orientation::Landscape)
    );
    assert_eq!(h.controller.engine().context_size(), (480, 320));
    assert_eq!(h.prefs.write_count(), 4);
}

#[test]
fn test_follow_window_size_resizes_surface_without_persisting() {
    let mut h = opened("follow_window");
    let generation = h.generation().expect("Generation");
    let committed = h.state.screen.config();

    h.send(AppIntent::PreviewAreaResized {
        width: 900,
        height: 700,
    })
    .expect("Vorschau");
    assert_eq!(h.controller.engine().context_size(), (768, 1024));

    h.send(AppIntent::FollowWindowSizeToggled { enabled: true })
        .expect("Folgen");
    assert_eq!(h.controller.engine().context_size(), (900, 700));
    assert_eq!(h.generation(), Some(generation + 1));

    h.send(AppIntent::PreviewAreaResized {
        width: 910,
        height: 700,
    })
    .expect("Vorschau");
    assert_eq!(h.controller.engine().context_size(), (910, 700));

    assert_eq!(h.prefs.write_count(), 0);
    assert_eq!(h.state.screen.config(), committed);

    h.send(AppIntent::FollowWindowSizeToggled { enabled: false })
        .expect("Folgen");
    assert_eq!(h.controller.engine().context_size(), (768, 1024));
    assert_eq!(h.state.view.context_size, (768, 1024));
}

#[test]
fn test_frame_selection_ends_follow_window_size() {
    let mut h = opened("follow_then_frame");
    h.send(AppIntent::PreviewAreaResized {
        width: 900,
        height: 700,
    })
    .expect("Vorschau");
    h.send(AppIntent::FollowWindowSizeToggled { enabled: true })
        .expect("Folgen");
    assert_eq!(h.controller.engine().context_size(), (900, 700));

    h.send(AppIntent::FrameSelected { index: 0 }).expect("Rahmen");

    assert!(!h.state.ui.follow_window_size);
    assert_eq!(h.controller.engine().context_size(), (320, 480));
    assert_eq!(h.state.view.context_size, (320, 480));
    let doc = h.state.session.current().expect("Dokument");
    assert_eq!((doc.loaded_at.width, doc.loaded_at.height), (320, 480));

    // weitere Größenänderungen des Vorschaubereichs greifen nicht mehr
    h.send(AppIntent::PreviewAreaResized {
        width: 950,
        height: 700,
    })
    .expect("Vorschau");
    assert_eq!(h.controller.engine().context_size(), (320, 480));
}

#[test]
fn test_current_frame_while_following_restores_surface() {
    let mut h = Harness::new();
    h.send(AppIntent::PreviewAreaResized {
        width: 900,
        height: 700,
    })
    .expect("Vorschau");
    h.send(AppIntent::FollowWindowSizeToggled { enabled: true })
        .expect("Folgen");

    // iPad 768x1024 entspricht der aktuellen Konfiguration
    h.send(AppIntent::FrameSelected { index: 8 }).expect("Rahmen");

    assert!(!h.state.ui.follow_window_size);
    assert_eq!(h.controller.engine().context_size(), (768, 1024));
    assert_eq!(h.prefs.write_count(), 0);
}
