//! Application State: zentrale Datenhaltung.

use crate::core::{Bounds, CurveState, DeviceInfo, DisplayInfo, RegionMapperState};
use crate::shared::AppOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen (Größen, Farben, Programmnamen)
    pub options: AppOptions,
    /// Aktive Bildschirme
    pub displays: Vec<DisplayInfo>,
    /// Index des gewählten Bildschirms in `displays`
    pub selected_display: Option<usize>,
    /// Gefundene Zeichengeräte
    pub devices: Vec<DeviceInfo>,
    /// Index des gewählten Geräts in `devices`
    pub selected_device: Option<usize>,
    /// Display-Mapper: immer der gesamte Bildschirm, nicht interaktiv
    pub display_mapper: RegionMapperState,
    /// Tablet-Mapper: aktiver Bereich innerhalb des Maximalbereichs
    pub tablet_mapper: RegionMapperState,
    /// Druckkurve des gewählten Geräts
    pub curve: CurveState,
    /// Letzte Meldung für die Status-Bar
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren State ohne Geräte
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren State mit geladenen Optionen
    pub fn with_options(options: AppOptions) -> Self {
        let curve = CurveState::new(Default::default(), options.curve_smoothness);
        Self {
            options,
            displays: Vec::new(),
            selected_display: None,
            devices: Vec::new(),
            selected_device: None,
            display_mapper: RegionMapperState::fixed_full(Bounds::default()),
            tablet_mapper: RegionMapperState::default(),
            curve,
            status_message: None,
            should_exit: false,
        }
    }

    /// Aktuell gewählter Bildschirm
    pub fn current_display(&self) -> Option<&DisplayInfo> {
        self.selected_display.and_then(|i| self.displays.get(i))
    }

    /// Aktuell gewähltes Gerät
    pub fn current_device(&self) -> Option<&DeviceInfo> {
        self.selected_device.and_then(|i| self.devices.get(i))
    }

    /// Setzt die Meldung für die Status-Bar.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
