//! Geräte-Panel: Auswahl, Bereichsfelder, Optionen und Übernehmen.

use crate::app::{AppIntent, AppState};
use crate::core::Region;

/// Rendert Auswahllisten, Zahlenfelder und Buttons und gibt erzeugte Events zurück.
pub fn render_device_panel(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Grid::new("device_selection")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Gerät:");
            if let Some(index) = selection_combo(
                ui,
                "device_combo",
                state.selected_device,
                state.devices.iter().map(|d| d.name.clone()),
            ) {
                events.push(AppIntent::DeviceSelected { index });
            }
            ui.end_row();

            ui.label("Bildschirm:");
            if let Some(index) = selection_combo(
                ui,
                "display_combo",
                state.selected_display,
                state.displays.iter().map(|d| d.label()),
            ) {
                events.push(AppIntent::DisplaySelected { index });
            }
            ui.end_row();
        });

    ui.separator();
    events.extend(render_area_fields(ui, state));
    ui.separator();

    ui.horizontal(|ui| {
        let mut full_area = state.tablet_mapper.full_area;
        if ui.checkbox(&mut full_area, "Full Area").changed() {
            events.push(AppIntent::FullAreaToggled { enabled: full_area });
        }

        let mut force_proportions = state.tablet_mapper.force_proportions;
        if ui
            .checkbox(&mut force_proportions, "Force Proportions")
            .changed()
        {
            events.push(AppIntent::ForceProportionsToggled {
                enabled: force_proportions,
            });
        }
    });

    ui.horizontal(|ui| {
        if ui.button("⟳ Neu einlesen").clicked() {
            events.push(AppIntent::RefreshRequested);
        }
        let can_apply = state.current_device().is_some();
        if ui
            .add_enabled(can_apply, egui::Button::new("✔ Übernehmen"))
            .clicked()
        {
            events.push(AppIntent::ApplyRequested);
        }
    });

    events
}

/// ComboBox über Einträge; liefert den neu gewählten Index.
fn selection_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    selected: Option<usize>,
    labels: impl Iterator<Item = String>,
) -> Option<usize> {
    let labels: Vec<String> = labels.collect();
    let current = selected
        .and_then(|i| labels.get(i).cloned())
        .unwrap_or_else(|| "–".to_string());

    let mut choice = selected;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current)
        .width(220.0)
        .show_ui(ui, |ui| {
            for (index, label) in labels.iter().enumerate() {
                ui.selectable_value(&mut choice, Some(index), label.as_str());
            }
        });

    match choice {
        Some(index) if choice != selected => Some(index),
        _ => None,
    }
}

/// Zahlenfelder für Breite, Höhe und Offset der Tablet-Region.
fn render_area_fields(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mapper = &state.tablet_mapper;
    let bounds = mapper.bounds;
    let mut region: Region = mapper.region;
    let mut changed = false;

    ui.add_enabled_ui(state.current_device().is_some(), |ui| {
        egui::Grid::new("tablet_area_fields")
            .num_columns(4)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Breite:");
                changed |= ui
                    .add(egui::DragValue::new(&mut region.width).range(1..=bounds.width.max(1)))
                    .changed();
                ui.label("Höhe:");
                changed |= ui
                    .add(egui::DragValue::new(&mut region.height).range(1..=bounds.height.max(1)))
                    .changed();
                ui.end_row();

                ui.label("X-Offset:");
                changed |= ui
                    .add(egui::DragValue::new(&mut region.offset_x).range(0..=bounds.width))
                    .changed();
                ui.label("Y-Offset:");
                changed |= ui
                    .add(egui::DragValue::new(&mut region.offset_y).range(0..=bounds.height))
                    .changed();
                ui.end_row();
            });
    });

    if changed {
        vec![AppIntent::TabletAreaEdited { region }]
    } else {
        Vec::new()
    }
}
