//! UI-Komponenten: Region-Mapper, Druckkurven-Editor, Geräte-Panel und Status-Bar.

pub mod device_panel;
mod main_panel;
/// Zeichen- und Interaktionslogik der Mapper
///
/// Die Mapper-Geometrie kommt vollständig aus `core::region_mapper`;
/// hier wird nur gezeichnet und Pointer-Deltas werden in Intents übersetzt.
pub mod region_mapper;
pub mod pressure_curve;
pub mod status;

pub use device_panel::render_device_panel;
pub use main_panel::render_main_panel;
pub use pressure_curve::render_pressure_curve_editor;
pub use region_mapper::{paint_link_lines, render_region_mapper, MapperView};
pub use status::render_status_bar;
