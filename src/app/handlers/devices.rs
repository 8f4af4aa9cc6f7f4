//! Handler für Bildschirm- und Geräteauswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::TabletBackend;

/// Liest Bildschirme und Geräte neu ein.
pub fn refresh(state: &mut AppState, backend: &dyn TabletBackend) -> anyhow::Result<()> {
    use_cases::devices::refresh(state, backend)
}

/// Wählt einen Bildschirm aus.
pub fn select_display(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::devices::select_display(state, index)
}

/// Wählt ein Gerät aus.
pub fn select_device(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::devices::select_device(state, index)
}

/// Lädt die Einstellungen des gewählten Geräts.
pub fn load_settings(state: &mut AppState, backend: &dyn TabletBackend) -> anyhow::Result<()> {
    use_cases::devices::load_device_settings(state, backend)
}
