use super::fake_backend::FakeBackend;
use wacacom::{AppController, AppIntent, AppState, Bounds, Region};

fn refreshed(backend: FakeBackend) -> (AppController, AppState) {
    let mut controller = AppController::new(Box::new(backend));
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_refresh_selects_primary_display_and_first_device() {
    let (_, state) = refreshed(FakeBackend::new());

    assert_eq!(state.current_display().map(|d| d.name.as_str()), Some("DP-1"));
    assert_eq!(state.current_device().map(|d| d.id), Some(12));
    assert_eq!(state.display_mapper.bounds, Bounds::new(1920, 1080));
    assert!(!state.display_mapper.interactive);
    assert_eq!(state.tablet_mapper.bounds, Bounds::new(15200, 9500));
    assert!(state.tablet_mapper.full_area);
    assert!(state.tablet_mapper.interactive);
}

#[test]
fn test_refresh_loads_partial_area_and_curve() {
    let mut backend = FakeBackend::new();
    backend.area = Region::new(1000, 500, 7600, 4750);
    backend.curve = [10, 30, 70, 90];

    let (_, state) = refreshed(backend);

    assert!(!state.tablet_mapper.full_area);
    assert_eq!(state.tablet_mapper.region, Region::new(1000, 500, 7600, 4750));
    assert_eq!(state.curve.curve.to_percent(), [10, 30, 70, 90]);
}

#[test]
fn test_refresh_without_devices_sets_status() {
    let mut backend = FakeBackend::new();
    backend.devices.clear();

    let (_, state) = refreshed(backend);

    assert!(state.current_device().is_none());
    assert_eq!(state.status_message.as_deref(), Some("Kein Tablet gefunden"));
}

#[test]
fn test_display_selected_switches_display_mapper() {
    let (mut controller, mut state) = refreshed(FakeBackend::new());

    controller
        .handle_intent(&mut state, AppIntent::DisplaySelected { index: 0 })
        .expect("DisplaySelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.selected_display, Some(0));
    assert_eq!(state.display_mapper.region, Region::new(0, 0, 1280, 1024));
}

#[test]
fn test_display_selected_out_of_range_reports_error() {
    let (mut controller, mut state) = refreshed(FakeBackend::new());

    let result = controller.handle_intent(&mut state, AppIntent::DisplaySelected { index: 9 });

    assert!(result.is_err());
    assert_eq!(state.selected_display, Some(1));
    assert!(state
        .status_message
        .as_deref()
        .is_some_and(|m| m.starts_with("Fehler:")));
}

#[test]
fn test_device_selected_loads_settings_of_new_device() {
    let (mut controller, mut state) = refreshed(FakeBackend::new());

    controller
        .handle_intent(&mut state, AppIntent::DeviceSelected { index: 1 })
        .expect("DeviceSelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.current_device().map(|d| d.id), Some(17));
    assert_eq!(state.tablet_mapper.bounds, Bounds::new(15200, 9500));
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let (mut controller, mut state) = refreshed(FakeBackend::new());
    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
}
