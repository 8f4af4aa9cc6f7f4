use crate::core::{ControlPoint, Region};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Bildschirme und Zeichengeräte vom Backend laden
    RefreshDevices,
    /// Bildschirm per Index auswählen
    SelectDisplay { index: usize },
    /// Gerät per Index auswählen
    SelectDevice { index: usize },
    /// Bereich, Maximalbereich und Druckkurve des gewählten Geräts laden
    LoadDeviceSettings,
    /// Anker des Tablet-Mappers verschieben
    DragTabletAnchor {
        index: usize,
        delta_px: Vec2,
        widget_size: Vec2,
    },
    /// Tablet-Region direkt setzen
    SetTabletRegion { region: Region },
    /// Gesamte Tablet-Fläche ein- oder ausschalten
    SetFullArea { enabled: bool },
    /// Proportionssperre setzen
    SetForceProportions { enabled: bool },
    /// Steuerpunkt der Druckkurve verschieben
    DragCurvePoint { point: ControlPoint, delta: Vec2 },
    /// Steuerpunkte der Druckkurve setzen
    SetCurvePoints { points: [f32; 4] },
    /// Bereich, Druckkurve und Bildschirmzuordnung schreiben
    ApplySettings,
    /// Anwendung beenden
    RequestExit,
}
