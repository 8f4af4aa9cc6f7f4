//! Rechtecke in physischen Einheiten (Geräte-Einheiten oder Display-Pixel).

use serde::{Deserialize, Serialize};

/// Gesamte adressierbare Fläche: Display-Auflösung oder Maximalbereich des Tablets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Erstellt neue Bounds
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Keine Fläche, z.B. solange kein Gerät geladen ist.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Abgebildeter Teilbereich innerhalb von [`Bounds`].
///
/// Invarianten nach [`Region::clamped_to`]: `width > 0`, `height > 0`,
/// Offsets ≥ 0 und `offset + extent <= bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Erstellt eine neue Region
    pub fn new(offset_x: i32, offset_y: i32, width: i32, height: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Region, die die gesamte Fläche abdeckt.
    pub fn full(bounds: Bounds) -> Self {
        Self::new(0, 0, bounds.width, bounds.height)
    }

    /// Ausdehnung ohne Offset
    pub fn extent(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Rechte Kante
    pub fn right(&self) -> i32 {
        self.offset_x + self.width
    }

    /// Untere Kante
    pub fn bottom(&self) -> i32 {
        self.offset_y + self.height
    }

    /// Prüft die Invarianten gegenüber `bounds`.
    pub fn fits_within(&self, bounds: Bounds) -> bool {
        self.width > 0
            && self.height > 0
            && self.offset_x >= 0
            && self.offset_y >= 0
            && self.right() <= bounds.width
            && self.bottom() <= bounds.height
    }

    /// Schiebt und kürzt die Region, bis sie in `bounds` liegt.
    ///
    /// Ausdehnungen werden auf `1..=bounds` begrenzt, danach die Offsets so,
    /// dass die Region vollständig innerhalb bleibt.
    pub fn clamped_to(&self, bounds: Bounds) -> Self {
        let width = self.width.clamp(1, bounds.width.max(1));
        let height = self.height.clamp(1, bounds.height.max(1));
        Self {
            offset_x: self.offset_x.clamp(0, (bounds.width - width).max(0)),
            offset_y: self.offset_y.clamp(0, (bounds.height - height).max(0)),
            width,
            height,
        }
    }
}
