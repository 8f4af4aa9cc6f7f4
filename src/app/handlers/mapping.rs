//! Handler für den Tablet-Mapper.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Region;
use glam::Vec2;

/// Verschiebt einen Anker.
pub fn drag_anchor(state: &mut AppState, index: usize, delta_px: Vec2, widget_size: Vec2) {
    use_cases::tablet_area::drag_anchor(state, index, delta_px, widget_size);
}

/// Setzt die Region direkt.
pub fn set_region(state: &mut AppState, region: Region) {
    use_cases::tablet_area::set_region(state, region);
}

/// Schaltet die gesamte Fläche.
pub fn set_full_area(state: &mut AppState, enabled: bool) {
    use_cases::tablet_area::set_full_area(state, enabled);
}

/// Setzt die Proportionssperre.
pub fn set_force_proportions(state: &mut AppState, enabled: bool) {
    use_cases::tablet_area::set_force_proportions(state, enabled);
}
