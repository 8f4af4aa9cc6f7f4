//! Core-Domänentypen: Regionen, Region-Mapper, Druckkurve und Geräte-Schnittstellen.

pub mod pressure_curve;
pub mod providers;
pub mod region;
/// Bidirektionale Abbildung zwischen physischer Region und Widget-Rechteck
///
/// Enthält die vier verknüpften Anker, die Pixel-Umrechnung und den Widget-Zustand.
pub mod region_mapper;

pub use pressure_curve::{
    cubic_bezier, BezierCurve, ControlPoint, CurveSamples, CurveState, DEFAULT_SMOOTHNESS,
};
pub use providers::{
    primary_display_index, DeviceAreaProvider, DeviceInfo, DeviceProvider, DisplayInfo,
    DisplayProvider, PressureCurveProvider, TabletBackend,
};
pub use region::{Bounds, Region};
pub use region_mapper::{
    to_source_region, AnchorLink, AnchorSet, PixelRect, RegionMapperState, BOTTOM_LEFT,
    BOTTOM_RIGHT, LINK_TABLE, TOP_LEFT, TOP_RIGHT,
};
