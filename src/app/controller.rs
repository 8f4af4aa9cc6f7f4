//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::TabletBackend;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält das Tablet-Backend; alle Geräte-Zugriffe laufen über den Controller.
pub struct AppController {
    backend: Box<dyn TabletBackend>,
}

impl AppController {
    /// Erstellt einen neuen Controller für das angegebene Backend.
    pub fn new(backend: Box<dyn TabletBackend>) -> Self {
        Self { backend }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, werden die restlichen Commands des Intents
    /// verworfen und der Fehler landet zusätzlich in der Status-Bar.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            if let Err(e) = self.handle_command(state, command) {
                state.set_status(format!("Fehler: {:#}", e));
                return Err(e);
            }
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;
        let backend = self.backend.as_ref();

        match command {
            // === Geräte ===
            AppCommand::RefreshDevices => handlers::devices::refresh(state, backend)?,
            AppCommand::SelectDisplay { index } => handlers::devices::select_display(state, index)?,
            AppCommand::SelectDevice { index } => handlers::devices::select_device(state, index)?,
            AppCommand::LoadDeviceSettings => handlers::devices::load_settings(state, backend)?,

            // === Tablet-Mapper ===
            AppCommand::DragTabletAnchor {
                index,
                delta_px,
                widget_size,
            } => handlers::mapping::drag_anchor(state, index, delta_px, widget_size),
            AppCommand::SetTabletRegion { region } => handlers::mapping::set_region(state, region),
            AppCommand::SetFullArea { enabled } => handlers::mapping::set_full_area(state, enabled),
            AppCommand::SetForceProportions { enabled } => {
                handlers::mapping::set_force_proportions(state, enabled)
            }

            // === Druckkurve ===
            AppCommand::DragCurvePoint { point, delta } => {
                handlers::curve::drag_point(state, point, delta)
            }
            AppCommand::SetCurvePoints { points } => handlers::curve::set_points(state, points),

            // === Sitzung ===
            AppCommand::ApplySettings => handlers::session::apply(state, backend)?,
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }
}
