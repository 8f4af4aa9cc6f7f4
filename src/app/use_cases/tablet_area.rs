//! Use-Case-Funktionen für den Tablet-Mapper.

use crate::app::AppState;
use crate::core::Region;
use glam::Vec2;

/// Verschiebt einen Anker des Tablet-Mappers und berechnet die Region neu.
pub fn drag_anchor(state: &mut AppState, index: usize, delta_px: Vec2, widget_size: Vec2) {
    if state.tablet_mapper.drag_anchor(index, delta_px, widget_size) {
        log::debug!(
            "Anker {} gezogen, Region jetzt {:?}",
            index,
            state.tablet_mapper.region
        );
    }
}

/// Übernimmt eine über die Zahlenfelder eingegebene Region.
pub fn set_region(state: &mut AppState, region: Region) {
    state.tablet_mapper.set_region(region);
}

/// Schaltet die Abbildung der gesamten Tablet-Fläche.
///
/// Beim Einschalten werden die Anker verworfen und die Region wird zur gesamten
/// Fläche. Beim Ausschalten bleibt die Region stehen.
pub fn set_full_area(state: &mut AppState, enabled: bool) {
    if enabled {
        state.tablet_mapper.reset_full_area();
    } else {
        state.tablet_mapper.full_area = false;
    }
}

/// Setzt die Proportionssperre.
pub fn set_force_proportions(state: &mut AppState, enabled: bool) {
    state.tablet_mapper.force_proportions = enabled;
}
