//! Region-Mapper: bildet einen physischen Bereich auf ein Widget ab und zurück.
//!
//! Drei Koordinatenräume:
//! - **normalisiert** `[0,1]²`, Y wächst nach oben (Y=1 = obere Kante): Anker
//! - **Widget-Pixel**, Y wächst nach unten: Darstellung und Pointer-Deltas
//! - **physisch** (Display-Pixel bzw. Tablet-Einheiten): [`Region`](super::Region)
//!
//! Die vier Anker bilden immer ein achsenparalleles Rechteck. Ein Drag an einer Ecke
//! verschiebt über die [`LINK_TABLE`] die Nachbarecke mit gleicher X- bzw. Y-Koordinate.
//!
//! Aufgeteilt in:
//! - `anchors`: Ankermenge, Link-Tabelle, Pixel-Rechteck, Rückrechnung in physische Einheiten
//! - `state`: Zustand eines Mapper-Widgets (Full-Area, Force-Proportions, Interaktivität)

mod anchors;
mod state;

pub use anchors::{
    to_source_region, AnchorLink, AnchorSet, PixelRect, BOTTOM_LEFT, BOTTOM_RIGHT, LINK_TABLE,
    TOP_LEFT, TOP_RIGHT,
};
pub use state::RegionMapperState;
