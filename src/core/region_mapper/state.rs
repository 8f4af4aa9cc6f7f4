//! Zustand eines Mapper-Widgets, vom Aufrufer besessen und pro Frame weitergereicht.

use super::anchors::{to_source_region, AnchorSet};
use crate::core::region::{Bounds, Region};
use glam::Vec2;

/// Anker, Bezugsfläche und zuletzt berechnete Region eines Mappers.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMapperState {
    /// Normalisierte Eckpunkte
    pub anchors: AnchorSet,
    /// Gesamte adressierbare Fläche
    pub bounds: Bounds,
    /// Aktuell abgebildete Region in physischen Einheiten
    pub region: Region,
    /// Gesamte Fläche ist abgebildet (wird durch jeden Drag aufgehoben)
    pub full_area: bool,
    /// Seitenverhältnis erzwingen, siehe [`RegionMapperState::enforce_proportions`]
    pub force_proportions: bool,
    /// Anker lassen sich ziehen
    pub interactive: bool,
}

impl Default for RegionMapperState {
    fn default() -> Self {
        Self::new(Region::default(), Bounds::default())
    }
}

impl RegionMapperState {
    /// Erstellt einen Mapper für `region` innerhalb von `bounds`.
    ///
    /// Interaktiv nur bei nicht-leeren `bounds`; ohne Fläche bleiben die Anker auf
    /// dem gesamten Bereich stehen.
    pub fn new(region: Region, bounds: Bounds) -> Self {
        let anchors = if bounds.is_empty() {
            AnchorSet::full()
        } else {
            AnchorSet::from_region(region, bounds)
        };
        Self {
            anchors,
            bounds,
            region,
            full_area: false,
            force_proportions: false,
            interactive: !bounds.is_empty(),
        }
    }

    /// Nicht-interaktiver Mapper über die gesamte Fläche (Display-Seite).
    pub fn fixed_full(bounds: Bounds) -> Self {
        Self {
            interactive: false,
            full_area: true,
            ..Self::new(Region::full(bounds), bounds)
        }
    }

    /// Übernimmt eine direkt eingegebene Region und leitet die Anker neu ab.
    ///
    /// Ohne Fläche passiert nichts.
    pub fn set_region(&mut self, region: Region) {
        if self.bounds.is_empty() {
            return;
        }
        self.region = region.clamped_to(self.bounds);
        self.anchors = AnchorSet::from_region(self.region, self.bounds);
        self.full_area = false;
    }

    /// Setzt auf die gesamte Fläche zurück und verwirft die bisherigen Anker.
    pub fn reset_full_area(&mut self) {
        if self.bounds.is_empty() {
            return;
        }
        self.region = Region::full(self.bounds);
        self.anchors = AnchorSet::from_region(self.region, self.bounds);
        self.full_area = true;
    }

    /// Verschiebt einen Anker und aktualisiert die Region.
    ///
    /// Gibt `false` zurück, wenn der Mapper nicht interaktiv ist, keine Fläche hat
    /// oder sich der Pointer nicht bewegt hat.
    pub fn drag_anchor(&mut self, index: usize, pointer_delta: Vec2, widget_size: Vec2) -> bool {
        if !self.interactive || self.bounds.is_empty() {
            return false;
        }

        let changed = self.anchors.drag(index, pointer_delta, widget_size);
        if changed {
            self.full_area = false;
            self.enforce_proportions();
            self.region = self.mapped_region(widget_size);
        }
        changed
    }

    /// Region, die den aktuellen Ankern bei gegebener Widget-Größe entspricht.
    pub fn mapped_region(&self, widget_size: Vec2) -> Region {
        let rect = self.anchors.to_pixel_rect(widget_size, Vec2::ZERO);
        to_source_region(&self.anchors, &rect, widget_size, self.bounds)
    }

    /// Einstiegspunkt für die Proportionssperre.
    ///
    /// Vertrag: wird nach jedem Drag mit den bereits begrenzten Ankern aufgerufen und
    /// darf sie so korrigieren, dass das Rechteck das Seitenverhältnis der `bounds`
    /// behält. Derzeit ohne Wirkung; `force_proportions` wird nur mitgeführt.
    fn enforce_proportions(&mut self) {
        if !self.force_proportions {
            return;
        }
        debug_assert!(self.anchors.is_rectangle());
    }
}
