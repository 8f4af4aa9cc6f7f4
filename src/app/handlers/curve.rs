//! Handler für den Druckkurven-Editor.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ControlPoint;
use glam::Vec2;

/// Verschiebt einen Steuerpunkt.
pub fn drag_point(state: &mut AppState, point: ControlPoint, delta: Vec2) {
    use_cases::pressure_curve::drag_point(state, point, delta);
}

/// Setzt beide Steuerpunkte.
pub fn set_points(state: &mut AppState, points: [f32; 4]) {
    use_cases::pressure_curve::set_points(state, points);
}
