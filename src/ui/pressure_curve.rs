//! Druckkurven-Editor: Kurve, Hilfslinien, Anfasser und Slider.

use super::region_mapper::{color, paint_grabber, paint_grid, pos2};
use crate::app::AppIntent;
use crate::core::pressure_curve::to_display;
use crate::core::{ControlPoint, CurveState};
use crate::shared::AppOptions;
use glam::Vec2;

/// Rendert den Kurven-Editor und gibt erzeugte Events zurück.
pub fn render_pressure_curve_editor(
    ui: &mut egui::Ui,
    curve: &CurveState,
    options: &AppOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.label("Druckkurve");
    let size = options.curve_editor_size;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size[0], size[1]), egui::Sense::hover());
    let frame_min = Vec2::new(rect.min.x, rect.min.y);
    let frame_size = Vec2::from(size);
    let painter = ui.painter_at(rect.expand(options.grab_radius_px + options.grab_border_px));

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(25));
    paint_grid(&painter, rect, options.curve_grid);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Inside,
    );

    let display = |p: Vec2| pos2(to_display(p, frame_min, frame_size));

    // Hilfslinien Endpunkt → Steuerpunkt
    let guide = egui::Stroke::new(1.0, egui::Color32::from_gray(140));
    painter.line_segment([display(Vec2::ZERO), display(curve.curve.p1)], guide);
    painter.line_segment([display(Vec2::ONE), display(curve.curve.p2)], guide);

    let points: Vec<egui::Pos2> = curve.samples().map(display).collect();
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(2.0, color(options.curve_color)),
    ));

    for point in ControlPoint::ALL {
        let value = curve.curve.control_point(point);
        let center = display(value);
        let grab = egui::Rect::from_center_size(
            center,
            egui::Vec2::splat(2.0 * (options.grab_radius_px + options.grab_border_px)),
        );
        let id = ui.id().with("curve_point").with(point_number(point));
        let response = ui
            .interact(grab, id, egui::Sense::drag())
            .on_hover_cursor(egui::CursorIcon::Grab)
            .on_hover_text(format!("({:.2}, {:.2})", value.x, value.y));

        if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CurvePointDragged {
                    point,
                    delta: Vec2::new(delta.x, delta.y) / frame_size,
                });
            }
        }
        paint_grabber(&painter, center, options, response.dragged() || response.hovered());
    }

    // Slider für exakte Werte
    let mut values = curve.curve.to_points();
    let mut changed = false;
    let labels = ["P1 x", "P1 y", "P2 x", "P2 y"];
    for (value, label) in values.iter_mut().zip(labels) {
        changed |= ui
            .add(egui::Slider::new(value, 0.0..=1.0).text(label))
            .changed();
    }
    if changed {
        events.push(AppIntent::CurvePointsEdited { points: values });
    }

    events
}

fn point_number(point: ControlPoint) -> u8 {
    match point {
        ControlPoint::First => 1,
        ControlPoint::Second => 2,
    }
}
