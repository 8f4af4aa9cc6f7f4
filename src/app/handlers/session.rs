//! Handler für Übernehmen und Beenden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::TabletBackend;

/// Schreibt die Einstellungen auf das Gerät.
pub fn apply(state: &mut AppState, backend: &dyn TabletBackend) -> anyhow::Result<()> {
    use_cases::apply::apply(state, backend)
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
