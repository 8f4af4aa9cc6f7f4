//! wacacom: Tablet-Bereich und Druckkurve für xsetwacom-Geräte einstellen.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod backend;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use backend::CliBackend;
pub use core::{
    AnchorSet, BezierCurve, Bounds, ControlPoint, CurveState, DeviceInfo, DisplayInfo, Region,
    RegionMapperState, TabletBackend,
};
pub use core::{DeviceAreaProvider, DeviceProvider, DisplayProvider, PressureCurveProvider};
pub use shared::AppOptions;
