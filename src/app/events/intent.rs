use crate::core::{ControlPoint, Region};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Bildschirme und Geräte neu einlesen
    RefreshRequested,
    /// Bildschirm in der Auswahlliste gewählt
    DisplaySelected { index: usize },
    /// Gerät in der Auswahlliste gewählt
    DeviceSelected { index: usize },
    /// Anker des Tablet-Mappers gezogen (Pointer-Delta in Widget-Pixeln)
    TabletAnchorDragged {
        index: usize,
        delta_px: Vec2,
        widget_size: Vec2,
    },
    /// Region über die Zahlenfelder geändert
    TabletAreaEdited { region: Region },
    /// "Full Area" umgeschaltet
    FullAreaToggled { enabled: bool },
    /// "Force Proportions" umgeschaltet
    ForceProportionsToggled { enabled: bool },
    /// Steuerpunkt der Druckkurve gezogen (Delta normalisiert auf die Editorgröße)
    CurvePointDragged { point: ControlPoint, delta: Vec2 },
    /// Steuerpunkte über die Slider geändert (`[p1x, p1y, p2x, p2y]`)
    CurvePointsEdited { points: [f32; 4] },
    /// Einstellungen auf das Gerät schreiben
    ApplyRequested,
    /// Anwendung beenden
    ExitRequested,
}
