//! Use-Case-Funktionen zum Schreiben der Einstellungen auf das Gerät.

use crate::app::AppState;
use crate::core::TabletBackend;
use anyhow::{anyhow, Context, Result};

/// Schreibt Bereich, Druckkurve und optional die Bildschirmzuordnung.
///
/// Ist die gesamte Fläche gewählt, wird der Bereich zurückgesetzt statt gesetzt.
pub fn apply(state: &mut AppState, backend: &dyn TabletBackend) -> Result<()> {
    let device = state
        .current_device()
        .ok_or_else(|| anyhow!("Kein Gerät ausgewählt"))?;
    let device_id = device.id;
    let device_name = device.name.clone();

    let mapper = &state.tablet_mapper;
    if mapper.full_area {
        backend
            .reset_area(device_id)
            .context("Bereich zurücksetzen fehlgeschlagen")?;
    } else {
        backend
            .set_area(device_id, &mapper.region)
            .context("Bereich setzen fehlgeschlagen")?;
    }

    backend
        .set_pressure_curve(device_id, &state.curve.curve)
        .context("Druckkurve setzen fehlgeschlagen")?;

    if state.options.map_to_output_on_apply {
        if let Some(display) = state.current_display() {
            backend
                .map_to_output(device_id, &display.name)
                .context("Bildschirmzuordnung fehlgeschlagen")?;
        }
    }

    log::info!(
        "Einstellungen übernommen für {}: Bereich {:?}{}, Druckkurve {:?}",
        device_name,
        mapper.region,
        if mapper.full_area { " (gesamt)" } else { "" },
        state.curve.curve.to_percent()
    );
    state.set_status(format!("Einstellungen für {} übernommen", device_name));
    Ok(())
}
