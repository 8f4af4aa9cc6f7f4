//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RefreshRequested => {
            vec![AppCommand::RefreshDevices, AppCommand::LoadDeviceSettings]
        }
        AppIntent::DisplaySelected { index } => vec![AppCommand::SelectDisplay { index }],
        AppIntent::DeviceSelected { index } => {
            if state.selected_device == Some(index) {
                return Vec::new();
            }
            vec![
                AppCommand::SelectDevice { index },
                AppCommand::LoadDeviceSettings,
            ]
        }
        AppIntent::TabletAnchorDragged {
            index,
            delta_px,
            widget_size,
        } => {
            if !state.tablet_mapper.interactive {
                return Vec::new();
            }
            vec![AppCommand::DragTabletAnchor {
                index,
                delta_px,
                widget_size,
            }]
        }
        AppIntent::TabletAreaEdited { region } => vec![AppCommand::SetTabletRegion { region }],
        AppIntent::FullAreaToggled { enabled } => vec![AppCommand::SetFullArea { enabled }],
        AppIntent::ForceProportionsToggled { enabled } => {
            vec![AppCommand::SetForceProportions { enabled }]
        }
        AppIntent::CurvePointDragged { point, delta } => {
            vec![AppCommand::DragCurvePoint { point, delta }]
        }
        AppIntent::CurvePointsEdited { points } => vec![AppCommand::SetCurvePoints { points }],
        AppIntent::ApplyRequested => vec![AppCommand::ApplySettings],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
