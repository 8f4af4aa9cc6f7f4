//! Schnittstellen zu Displays und Tablet-Geräten.
//!
//! Die Core-Typen kennen keine Kommandozeilen-Tools. Alles, was Geräte abfragt oder
//! Einstellungen schreibt, läuft über diese Traits; die produktive Implementierung
//! liegt in [`crate::backend`], Tests verwenden In-Memory-Fakes.

use super::pressure_curve::BezierCurve;
use super::region::{Bounds, Region};
use anyhow::Result;

/// Ein aktiver Bildschirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Ausgangsname (z.B. `DP-1`), wird für `MapToOutput` verwendet
    pub name: String,
    /// Primärer Bildschirm
    pub primary: bool,
    /// Auflösung in Pixeln
    pub width: i32,
    pub height: i32,
}

impl DisplayInfo {
    /// Gesamte Fläche des Bildschirms.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Anzeigetext für Auswahllisten.
    pub fn label(&self) -> String {
        format!("{} ({}×{})", self.name, self.width, self.height)
    }
}

/// Ein Zeichengerät (Stift) eines Tablets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Gerätekennung für alle weiteren Abfragen
    pub id: u32,
    /// Gerätename laut Treiber
    pub name: String,
}

/// Liefert die aktiven Bildschirme.
pub trait DisplayProvider {
    /// Alle aktiven Bildschirme in Reihenfolge des Systems.
    fn list_displays(&self) -> Result<Vec<DisplayInfo>>;
}

/// Index des primären Bildschirms, sonst des ersten; `None` ohne Bildschirme.
pub fn primary_display_index(displays: &[DisplayInfo]) -> Option<usize> {
    displays
        .iter()
        .position(|d| d.primary)
        .or(if displays.is_empty() { None } else { Some(0) })
}

/// Liefert die Zeichengeräte.
pub trait DeviceProvider {
    /// Alle Stifte; Pads, Radierer und Touch-Geräte sind ausgeschlossen.
    fn list_drawing_devices(&self) -> Result<Vec<DeviceInfo>>;
}

/// Liest und schreibt den aktiven Bereich eines Geräts.
pub trait DeviceAreaProvider {
    /// Aktuell eingestellter Bereich.
    fn current_area(&self, device_id: u32) -> Result<Region>;

    /// Maximaler Bereich des Geräts (Bezugsfläche des Tablet-Mappers).
    fn entire_area(&self, device_id: u32) -> Result<Region>;

    /// Setzt den Bereich auf die gesamte Fläche zurück.
    fn reset_area(&self, device_id: u32) -> Result<()>;

    /// Setzt den Bereich.
    fn set_area(&self, device_id: u32, region: &Region) -> Result<()>;

    /// Bildet das Gerät auf einen Bildschirm ab.
    fn map_to_output(&self, device_id: u32, display_name: &str) -> Result<()>;
}

/// Liest und schreibt die Druckkurve eines Geräts.
pub trait PressureCurveProvider {
    /// Aktuelle Kurve, Werte in `[0,1]`.
    fn pressure_curve(&self, device_id: u32) -> Result<BezierCurve>;

    /// Setzt die Kurve.
    fn set_pressure_curve(&self, device_id: u32, curve: &BezierCurve) -> Result<()>;
}

/// Alles, was die Anwendung von einem Tablet-Backend braucht.
pub trait TabletBackend:
    DisplayProvider + DeviceProvider + DeviceAreaProvider + PressureCurveProvider
{
}

impl<T> TabletBackend for T where
    T: DisplayProvider + DeviceProvider + DeviceAreaProvider + PressureCurveProvider
{
}
