//! Region-Mapper-Widget: Rahmen, Raster, abgebildetes Rechteck und Anfasser.

use crate::app::AppIntent;
use crate::core::RegionMapperState;
use crate::shared::AppOptions;
use glam::Vec2;

/// Ergebnis eines gezeichneten Mappers.
pub struct MapperView {
    /// Bildschirmpositionen der vier Anker (Reihenfolge wie die Anker-Indizes)
    pub anchors: [egui::Pos2; 4],
    /// Erzeugte Intents (nur bei interaktiven Mappern)
    pub intents: Vec<AppIntent>,
}

pub(crate) fn pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(crate) fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Zeichnet ein Raster mit `divisions` Spalten und Zeilen in `rect`.
pub(crate) fn paint_grid(painter: &egui::Painter, rect: egui::Rect, divisions: [u32; 2]) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(60));
    let [columns, rows] = divisions.map(|d| d.max(1));

    for i in 1..columns {
        let x = rect.min.x + rect.width() * i as f32 / columns as f32;
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
    }
    for i in 1..rows {
        let y = rect.min.y + rect.height() * i as f32 / rows as f32;
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
    }
}

/// Zeichnet einen Anfasser (gefüllter Kreis mit Rand).
pub(crate) fn paint_grabber(
    painter: &egui::Painter,
    center: egui::Pos2,
    options: &AppOptions,
    active: bool,
) {
    let fill = if active {
        egui::Color32::from_rgb(255, 200, 0)
    } else {
        egui::Color32::WHITE
    };
    painter.circle(
        center,
        options.grab_radius_px,
        fill,
        egui::Stroke::new(options.grab_border_px, egui::Color32::BLACK),
    );
}

/// Rendert einen Mapper der Größe `size`.
///
/// Interaktive Mapper erzeugen pro gezogenem Anker ein
/// [`AppIntent::TabletAnchorDragged`] mit dem Pointer-Delta dieses Frames.
pub fn render_region_mapper(
    ui: &mut egui::Ui,
    id_salt: &str,
    mapper: &RegionMapperState,
    size: [f32; 2],
    options: &AppOptions,
) -> MapperView {
    let widget_size = Vec2::from(size);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size[0], size[1]), egui::Sense::hover());
    let origin = Vec2::new(rect.min.x, rect.min.y);
    let painter = ui.painter_at(rect.expand(options.grab_radius_px + options.grab_border_px));

    // Rahmen + Raster
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(25));
    paint_grid(&painter, rect, options.mapper_grid);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Inside,
    );

    // Abgebildetes Rechteck mit Größenangabe
    let pixel_rect = mapper.anchors.to_pixel_rect(widget_size, origin);
    let mapped = egui::Rect::from_two_pos(pos2(pixel_rect.min), pos2(pixel_rect.max));
    painter.rect_filled(mapped, 0.0, color(options.mapped_area_color));
    painter.text(
        mapped.center(),
        egui::Align2::CENTER_CENTER,
        format!("{}×{}", mapper.region.width, mapper.region.height),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );

    let positions = mapper.anchors.pixel_positions(widget_size, origin);
    let anchors = positions.map(pos2);
    let mut intents = Vec::new();

    for (index, &center) in anchors.iter().enumerate() {
        let mut active = false;
        if mapper.interactive {
            let grab = egui::Rect::from_center_size(
                center,
                egui::Vec2::splat(2.0 * (options.grab_radius_px + options.grab_border_px)),
            );
            let response = ui
                .interact(grab, ui.id().with(id_salt).with(index), egui::Sense::drag())
                .on_hover_cursor(egui::CursorIcon::Grab);
            active = response.dragged() || response.hovered();

            if response.dragged() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                let delta = response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    intents.push(AppIntent::TabletAnchorDragged {
                        index,
                        delta_px: Vec2::new(delta.x, delta.y),
                        widget_size,
                    });
                }
            }
        }
        paint_grabber(&painter, center, options, active);
    }

    MapperView { anchors, intents }
}

/// Verbindet die zusammengehörigen Anker zweier Mapper mit Linien.
pub fn paint_link_lines(
    ctx: &egui::Context,
    from: &[egui::Pos2; 4],
    to: &[egui::Pos2; 4],
    options: &AppOptions,
) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("mapper_link_lines"),
    ));
    let stroke = egui::Stroke::new(1.0, color(options.link_line_color));
    for (&a, &b) in from.iter().zip(to.iter()) {
        painter.line_segment([a, b], stroke);
    }
}
