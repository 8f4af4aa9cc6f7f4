//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.current_device() {
                Some(device) => ui.label(format!("Gerät: {} (id {})", device.name, device.id)),
                None => ui.label("Kein Gerät"),
            };

            ui.separator();

            match state.current_display() {
                Some(display) => ui.label(format!("Bildschirm: {}", display.label())),
                None => ui.label("Kein Bildschirm"),
            };

            ui.separator();

            let region = state.tablet_mapper.region;
            let area = if state.tablet_mapper.full_area {
                "gesamt".to_string()
            } else {
                format!(
                    "{}×{} @ ({}, {})",
                    region.width, region.height, region.offset_x, region.offset_y
                )
            };
            ui.label(format!("Bereich: {}", area));

            ui.separator();

            let [p1x, p1y, p2x, p2y] = state.curve.curve.to_percent();
            ui.label(format!("Druck: {} {} {} {}", p1x, p1y, p2x, p2y));

            // Statusnachricht (z.B. Fehler beim Übernehmen)
            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
