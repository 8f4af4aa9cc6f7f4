//! Use-Case-Funktionen für Bildschirm- und Geräteauswahl.

use crate::app::AppState;
use crate::core::{
    primary_display_index, BezierCurve, CurveState, RegionMapperState, TabletBackend,
};
use anyhow::{bail, Result};

/// Liest Bildschirme und Zeichengeräte neu ein.
///
/// Wählt den primären Bildschirm und das erste Gerät. Die Geräte-Einstellungen
/// werden erst über [`load_device_settings`] geladen.
pub fn refresh(state: &mut AppState, backend: &dyn TabletBackend) -> Result<()> {
    let displays = backend.list_displays()?;
    let selected_display = primary_display_index(&displays);
    state.displays = displays;
    state.selected_display = None;
    if let Some(index) = selected_display {
        select_display(state, index)?;
    }

    state.devices = backend.list_drawing_devices()?;
    state.selected_device = if state.devices.is_empty() {
        None
    } else {
        Some(0)
    };

    log::info!(
        "{} Bildschirm(e), {} Zeichengerät(e) gefunden",
        state.displays.len(),
        state.devices.len()
    );
    if state.devices.is_empty() {
        state.set_status("Kein Tablet gefunden");
    }
    Ok(())
}

/// Wechselt den Bildschirm des Display-Mappers.
pub fn select_display(state: &mut AppState, index: usize) -> Result<()> {
    let Some(display) = state.displays.get(index) else {
        bail!(
            "Bildschirm {} existiert nicht ({} vorhanden)",
            index,
            state.displays.len()
        );
    };

    state.display_mapper = RegionMapperState::fixed_full(display.bounds());
    log::info!("Bildschirm gewählt: {}", display.label());
    state.selected_display = Some(index);
    Ok(())
}

/// Wählt ein Zeichengerät aus.
pub fn select_device(state: &mut AppState, index: usize) -> Result<()> {
    let Some(device) = state.devices.get(index) else {
        bail!(
            "Gerät {} existiert nicht ({} vorhanden)",
            index,
            state.devices.len()
        );
    };

    log::info!("Gerät gewählt: {} (id {})", device.name, device.id);
    state.selected_device = Some(index);
    Ok(())
}

/// Lädt Maximalbereich, aktuellen Bereich und Druckkurve des gewählten Geräts.
///
/// Ohne gewähltes Gerät werden Tablet-Mapper und Druckkurve zurückgesetzt.
pub fn load_device_settings(state: &mut AppState, backend: &dyn TabletBackend) -> Result<()> {
    let Some(device_id) = state.current_device().map(|d| d.id) else {
        state.tablet_mapper = RegionMapperState::default();
        state.curve = CurveState::new(BezierCurve::linear(), state.options.curve_smoothness);
        return Ok(());
    };

    let entire = backend.entire_area(device_id)?;
    let current = backend.current_area(device_id)?;
    let curve = backend.pressure_curve(device_id)?;

    let bounds = entire.extent();
    let force_proportions = state.tablet_mapper.force_proportions;
    let mut mapper = RegionMapperState::new(current.clamped_to(bounds), bounds);
    mapper.full_area = mapper.region == entire;
    mapper.force_proportions = force_proportions;

    log::info!(
        "Gerät {}: Bereich {:?} von {}×{}, Druckkurve {:?}",
        device_id,
        mapper.region,
        bounds.width,
        bounds.height,
        curve.to_percent()
    );

    state.tablet_mapper = mapper;
    state.curve = CurveState::new(curve, state.options.curve_smoothness);
    Ok(())
}
