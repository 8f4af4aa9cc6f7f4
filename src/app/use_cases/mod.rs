//! Use-Cases der Application-Layer-Orchestrierung.

pub mod apply;
pub mod devices;
pub mod pressure_curve;
pub mod tablet_area;
