//! Hauptbereich: beide Mapper nebeneinander, darunter Geräte-Panel und Druckkurve.

use super::device_panel::render_device_panel;
use super::pressure_curve::render_pressure_curve_editor;
use super::region_mapper::{paint_link_lines, render_region_mapper};
use crate::app::{AppIntent, AppState};

/// Rendert den Hauptbereich und gibt erzeugte Events zurück.
pub fn render_main_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Bildschirm");
                    let display = render_region_mapper(
                        ui,
                        "display_mapper",
                        &state.display_mapper,
                        state.options.display_mapper_size,
                        &state.options,
                    );

                    ui.add_space(24.0);

                    ui.label("Tablet");
                    let tablet = render_region_mapper(
                        ui,
                        "tablet_mapper",
                        &state.tablet_mapper,
                        state.options.tablet_mapper_size,
                        &state.options,
                    );

                    if state.current_device().is_some() {
                        paint_link_lines(ctx, &display.anchors, &tablet.anchors, &state.options);
                    }
                    events.extend(display.intents);
                    events.extend(tablet.intents);
                });
            });

            ui.separator();
            events.extend(render_device_panel(ui, state));
            ui.separator();
            events.extend(render_pressure_curve_editor(ui, &state.curve, &state.options));
        });
    });

    events
}
