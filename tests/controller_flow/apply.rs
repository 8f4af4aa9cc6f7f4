use super::fake_backend::{Call, FakeBackend};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wacacom::{AppController, AppIntent, AppState, Region};

fn refreshed(backend: FakeBackend) -> (AppController, AppState, Rc<RefCell<Vec<Call>>>) {
    let calls = backend.calls.clone();
    let mut controller = AppController::new(Box::new(backend));
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte ohne Fehler durchlaufen");
    (controller, state, calls)
}

#[test]
fn test_apply_full_area_resets_area_then_writes_curve_and_output() {
    let (mut controller, mut state, calls) = refreshed(FakeBackend::new());

    controller
        .handle_intent(&mut state, AppIntent::ApplyRequested)
        .expect("ApplyRequested sollte ohne Fehler durchlaufen");

    assert_eq!(
        *calls.borrow(),
        vec![
            Call::ResetArea(12),
            Call::SetPressureCurve(12, [0, 0, 100, 100]),
            Call::MapToOutput(12, "DP-1".to_string()),
        ]
    );
    assert!(state
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("übernommen")));
}

#[test]
fn test_apply_partial_area_sets_area() {
    let (mut controller, mut state, calls) = refreshed(FakeBackend::new());
    controller
        .handle_intent(
            &mut state,
            AppIntent::TabletAnchorDragged {
                index: 0,
                delta_px: Vec2::new(60.0, 0.0),
                widget_size: Vec2::new(240.0, 135.0),
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ApplyRequested)
        .expect("ApplyRequested sollte ohne Fehler durchlaufen");

    assert_eq!(
        calls.borrow()[0],
        Call::SetArea(12, Region::new(3800, 0, 11400, 9500))
    );
}

#[test]
fn test_apply_without_map_to_output_skips_output() {
    let (mut controller, mut state, calls) = refreshed(FakeBackend::new());
    state.options.map_to_output_on_apply = false;

    controller
        .handle_intent(&mut state, AppIntent::ApplyRequested)
        .expect("ApplyRequested sollte ohne Fehler durchlaufen");

    assert!(!calls
        .borrow()
        .iter()
        .any(|c| matches!(c, Call::MapToOutput(..))));
}

#[test]
fn test_apply_failure_stops_and_reports() {
    let mut backend = FakeBackend::new();
    backend.area = Region::new(0, 0, 7600, 4750);
    backend.fail_set_area = true;
    let (mut controller, mut state, calls) = refreshed(backend);

    let result = controller.handle_intent(&mut state, AppIntent::ApplyRequested);

    let err = result.expect_err("Setzen des Bereichs sollte fehlschlagen");
    assert!(format!("{:#}", err).contains("Bereich setzen fehlgeschlagen"));
    assert!(calls.borrow().is_empty());
    assert!(state
        .status_message
        .as_deref()
        .is_some_and(|m| m.starts_with("Fehler:")));
}

#[test]
fn test_apply_without_device_is_error() {
    let mut backend = FakeBackend::new();
    backend.devices.clear();
    let (mut controller, mut state, _) = refreshed(backend);

    assert!(controller
        .handle_intent(&mut state, AppIntent::ApplyRequested)
        .is_err());
}
