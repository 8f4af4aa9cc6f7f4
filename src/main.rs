//! wacacom.
//!
//! Grafische Oberfläche zum Einstellen von Tablet-Bereich, Bildschirmzuordnung
//! und Druckkurve über xsetwacom.

use eframe::egui;
use wacacom::{ui, AppController, AppIntent, AppOptions, AppState, CliBackend};

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

        log::info!("wacacom v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let app_options = AppOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte einmal ablegen, damit die Datei von Hand anpassbar ist
            if let Err(e) = app_options.save_to_file(&config_path) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(app_options.window_size)
                .with_title("wacacom"),
            ..Default::default()
        };

        eframe::run_native(
            "wacacom",
            options,
            Box::new(|_cc| Ok(Box::new(TabletApp::new(app_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TabletApp {
    state: AppState,
    controller: AppController,
}

impl TabletApp {
    fn new(options: AppOptions) -> Self {
        let backend = CliBackend::from_options(&options);
        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::new(Box::new(backend)),
        };

        // Geräte beim Start einlesen
        app.process_events(vec![AppIntent::RefreshRequested]);
        app
    }
}

impl eframe::App for TabletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl TabletApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_main_panel(ctx, &self.state));

        // Strg+Q beendet
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            events.push(AppIntent::ExitRequested);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
