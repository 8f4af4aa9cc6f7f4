//! Use-Case-Funktionen für den Druckkurven-Editor.

use crate::app::AppState;
use crate::core::{BezierCurve, ControlPoint};
use glam::Vec2;

/// Verschiebt einen Steuerpunkt um ein normalisiertes Delta.
pub fn drag_point(state: &mut AppState, point: ControlPoint, delta: Vec2) {
    state.curve.curve.drag_control_point(point, delta);
}

/// Setzt beide Steuerpunkte (`[p1x, p1y, p2x, p2y]`), begrenzt auf `[0,1]`.
pub fn set_points(state: &mut AppState, points: [f32; 4]) {
    state.curve.curve = BezierCurve::from_points(points);
}
