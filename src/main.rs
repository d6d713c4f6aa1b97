//! RML Viewer.
//!
//! Vorschau für RML-Dokumente in simulierten Geräte-Rahmen mit Live-Reload.

use eframe::egui;
use rml_viewer::app::{drain_changed_paths, LiveReloadWatcher, Waker};
use rml_viewer::{
    ui, AppController, AppIntent, AppState, HeadlessEngine, RenderingEngine, SearchPaths,
    TomlPreferences, ViewerContext, ViewerOptions,
};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("RML Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let startup_file = std::env::args_os().nth(1).map(PathBuf::from);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 900.0])
                .with_title("RML Viewer"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "RML Viewer",
            options,
            Box::new(move |cc| Ok(Box::new(ViewerApp::new(&cc.egui_ctx, startup_file)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    changes: mpsc::Receiver<PathBuf>,
    title: String,
}

impl ViewerApp {
    fn new(ctx: &egui::Context, startup_file: Option<PathBuf>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let options = ViewerOptions::load_from_file(&ViewerOptions::config_path());
        let preferences = TomlPreferences::load_from_file(&options.preferences_path());

        let mut state = AppState::from_preferences(options.clone(), &preferences);
        let context = ViewerContext::new(
            Box::new(HeadlessEngine::new(
                options.default_screen_width,
                options.default_screen_height,
            )),
            Box::new(SearchPaths::new()),
            Box::new(preferences),
        );

        let (sender, changes) = mpsc::channel();
        let repaint_ctx = ctx.clone();
        let waker: Waker = Arc::new(move || repaint_ctx.request_repaint());
        match LiveReloadWatcher::new(sender, Some(waker)) {
            Ok(watcher) => state.session.attach_watcher(Box::new(watcher)),
            Err(e) => log::warn!("Live-Reload nicht verfügbar: {:#}", e),
        }

        let mut controller = AppController::new(context);
        controller.startup(&mut state);

        let mut app = Self {
            state,
            controller,
            changes,
            title: String::new(),
        };
        if let Some(path) = startup_file {
            app.process_events(vec![AppIntent::FileSelected { path }]);
        }
        app
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now = Instant::now();
        self.state.ui.expire_status(now);

        // Dateiänderungen aus dem Watcher-Thread, pro Frame zusammengefasst
        let mut events: Vec<AppIntent> = drain_changed_paths(&self.changes)
            .into_iter()
            .map(|path| AppIntent::FileChanged { path })
            .collect();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::PointerMoved { .. } | AppIntent::PreviewAreaResized { .. }
            )
        });

        self.process_events(events);
        self.sync_title(ctx);
        self.maybe_request_repaint(ctx, has_meaningful_events, now);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::collect_keyboard_intents(
            ctx,
            self.state.session.is_open(),
        ));
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        ui::render_log_panel(ctx, &self.state);

        let engine = self.controller.engine();
        let document = self.state.session.view(engine);
        events.extend(ui::render_properties_panel(ctx, &self.state, document));
        events.extend(ui::render_preview(
            ctx,
            &self.state,
            document,
            engine.debugger_visible(),
        ));

        events.extend(ui::handle_file_dialogs(&mut self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.state.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool, now: Instant) {
        if self.state.view.take_repaint_request() || has_meaningful_events {
            ctx.request_repaint();
        }

        // Statusnachricht nach Ablauf ausblenden
        if let Some(msg) = &self.state.ui.status_message {
            let remaining = msg
                .timeout
                .saturating_sub(now.saturating_duration_since(msg.shown_at));
            ctx.request_repaint_after(remaining);
        }
    }
}
