//! Normalisierte Ankermenge und Umrechnungen zwischen den Koordinatenräumen.

use crate::core::region::{Bounds, Region};
use glam::Vec2;

/// Index der unteren linken Ecke
pub const BOTTOM_LEFT: usize = 0;
/// Index der oberen linken Ecke
pub const TOP_LEFT: usize = 1;
/// Index der unteren rechten Ecke
pub const BOTTOM_RIGHT: usize = 2;
/// Index der oberen rechten Ecke
pub const TOP_RIGHT: usize = 3;

/// Nachbarn einer Ecke, die dieselbe Koordinate teilen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorLink {
    /// Ecke mit gleicher X-Koordinate
    pub horizontal: usize,
    /// Ecke mit gleicher Y-Koordinate
    pub vertical: usize,
}

/// Feste Verknüpfung je Anker-Index.
pub const LINK_TABLE: [AnchorLink; 4] = [
    AnchorLink {
        horizontal: TOP_LEFT,
        vertical: BOTTOM_RIGHT,
    },
    AnchorLink {
        horizontal: BOTTOM_LEFT,
        vertical: TOP_RIGHT,
    },
    AnchorLink {
        horizontal: TOP_RIGHT,
        vertical: BOTTOM_LEFT,
    },
    AnchorLink {
        horizontal: BOTTOM_RIGHT,
        vertical: TOP_LEFT,
    },
];

/// Toleranz für den Rechteck-Check
const LINK_EPSILON: f32 = 1e-6;

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Rechteck in Widget-Pixeln (Y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Obere linke Ecke
    pub min: Vec2,
    /// Untere rechte Ecke
    pub max: Vec2,
}

impl PixelRect {
    /// Ausdehnung `max - min` (negativ, wenn die Kanten überkreuzt wurden)
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Vier Eckpunkte im normalisierten Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    points: [Vec2; 4],
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::full()
    }
}

impl AnchorSet {
    /// Anker für die gesamte Fläche: (0,0), (0,1), (1,0), (1,1).
    pub fn full() -> Self {
        Self {
            points: [
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
            ],
        }
    }

    /// Berechnet die Anker für `region` innerhalb von `bounds`.
    ///
    /// X: linke Kante `offset_x / W`, rechte Kante `(offset_x + width) / W`.
    /// Y (gespiegelt): obere Kante `1 - offset_y / H`, untere Kante `1 - (offset_y + height) / H`.
    pub fn from_region(region: Region, bounds: Bounds) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0, "Leere Bounds");
        let total = Vec2::new(bounds.width as f32, bounds.height as f32);

        let left = region.offset_x as f32 / total.x;
        let right = region.right() as f32 / total.x;
        let top = 1.0 - region.offset_y as f32 / total.y;
        let bottom = 1.0 - region.bottom() as f32 / total.y;

        let mut points = [Vec2::ZERO; 4];
        points[BOTTOM_LEFT] = Vec2::new(left, bottom);
        points[TOP_LEFT] = Vec2::new(left, top);
        points[BOTTOM_RIGHT] = Vec2::new(right, bottom);
        points[TOP_RIGHT] = Vec2::new(right, top);

        Self {
            points: points.map(|p| p.clamp(Vec2::ZERO, Vec2::ONE)),
        }
    }

    /// Read-only Sicht auf die vier Punkte.
    pub fn points(&self) -> &[Vec2; 4] {
        &self.points
    }

    /// Einzelner Anker.
    pub fn get(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    /// Verschiebt Anker `index` um ein Pointer-Delta in Widget-Pixeln.
    ///
    /// X wandert gemeinsam mit dem horizontal verknüpften Anker, beide werden
    /// einzeln auf `[0,1]` begrenzt. Y sinkt mit wachsendem Pointer-Y; der vertikal
    /// verknüpfte Anker übernimmt den resultierenden Wert.
    ///
    /// Gibt `true` zurück, sobald sich der Pointer bewegt hat, auch wenn die
    /// Begrenzung die Bewegung komplett aufhebt.
    pub fn drag(&mut self, index: usize, pointer_delta: Vec2, widget_size: Vec2) -> bool {
        assert!(index < 4, "Anker-Index {} außerhalb von 0..4", index);
        assert!(
            widget_size.x > 0.0 && widget_size.y > 0.0,
            "Widget-Größe muss positiv sein: {:?}",
            widget_size
        );

        let delta = pointer_delta / widget_size;
        let link = LINK_TABLE[index];

        self.points[index].x = clamp_unit(self.points[index].x + delta.x);
        self.points[link.horizontal].x = clamp_unit(self.points[link.horizontal].x + delta.x);

        self.points[index].y = clamp_unit(self.points[index].y - delta.y);
        self.points[link.vertical].y = clamp_unit(self.points[index].y);

        pointer_delta != Vec2::ZERO
    }

    /// Prüft, ob alle Anker ihre verknüpften Koordinaten teilen.
    pub fn is_rectangle(&self) -> bool {
        LINK_TABLE.iter().enumerate().all(|(i, link)| {
            (self.points[i].x - self.points[link.horizontal].x).abs() <= LINK_EPSILON
                && (self.points[i].y - self.points[link.vertical].y).abs() <= LINK_EPSILON
        })
    }

    /// Widget-Pixelposition eines Ankers: `(x·w, (1−y)·h) + origin`.
    pub fn pixel_position(&self, index: usize, widget_size: Vec2, origin: Vec2) -> Vec2 {
        let p = self.points[index];
        Vec2::new(p.x, 1.0 - p.y) * widget_size + origin
    }

    /// Widget-Pixelpositionen aller Anker (Reihenfolge wie die Indizes).
    pub fn pixel_positions(&self, widget_size: Vec2, origin: Vec2) -> [Vec2; 4] {
        std::array::from_fn(|i| self.pixel_position(i, widget_size, origin))
    }

    /// Abgebildetes Rechteck in Widget-Pixeln (obere linke bis untere rechte Ecke).
    pub fn to_pixel_rect(&self, widget_size: Vec2, origin: Vec2) -> PixelRect {
        PixelRect {
            min: self.pixel_position(TOP_LEFT, widget_size, origin),
            max: self.pixel_position(BOTTOM_RIGHT, widget_size, origin),
        }
    }
}

/// Rechnet ein Pixel-Rechteck zurück in physische Einheiten.
///
/// Breite und Höhe werden linear skaliert und abgeschnitten. Der Offset hängt nur
/// davon ab, ob die linke (bzw. obere) Kante vom Rand gelöst wurde: dann zählt der
/// gesamte restliche Widget-Platz als Offset. Das ist nur korrekt, solange die
/// gegenüberliegende Kante am Rand liegt; werden beide Kanten einer Achse nach
/// innen gezogen, ist der Offset zu groß.
pub fn to_source_region(
    anchors: &AnchorSet,
    rect: &PixelRect,
    widget_size: Vec2,
    bounds: Bounds,
) -> Region {
    assert!(
        widget_size.x > 0.0 && widget_size.y > 0.0,
        "Widget-Größe muss positiv sein: {:?}",
        widget_size
    );

    let scale = |pixels: f32, widget: f32, total: i32| (pixels / widget * total as f32) as i32;
    let size = rect.size();

    let width = scale(size.x, widget_size.x, bounds.width);
    let height = scale(size.y, widget_size.y, bounds.height);

    let left_detached = anchors.get(BOTTOM_LEFT).x > 0.0;
    let top_detached = anchors.get(TOP_RIGHT).y < 1.0;

    let offset_x = if left_detached {
        scale(widget_size.x - size.x, widget_size.x, bounds.width)
    } else {
        0
    };
    let offset_y = if top_detached {
        scale(widget_size.y - size.y, widget_size.y, bounds.height)
    } else {
        0
    };

    Region::new(offset_x, offset_y, width, height).clamped_to(bounds)
}
