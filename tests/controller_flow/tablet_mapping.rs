use super::fake_backend::FakeBackend;
use glam::Vec2;
use wacacom::{
    AppController, AppIntent, AppState, BezierCurve, ControlPoint, Region, RegionMapperState,
};

const TABLET_WIDGET: Vec2 = Vec2::new(240.0, 135.0);

fn refreshed() -> (AppController, AppState) {
    let mut controller = AppController::new(Box::new(FakeBackend::new()));
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_anchor_drag_shrinks_region_and_clears_full_area() {
    let (mut controller, mut state) = refreshed();

    // Linke Kante um ein Viertel nach rechts
    controller
        .handle_intent(
            &mut state,
            AppIntent::TabletAnchorDragged {
                index: 0,
                delta_px: Vec2::new(60.0, 0.0),
                widget_size: TABLET_WIDGET,
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");

    assert!(!state.tablet_mapper.full_area);
    assert_eq!(state.tablet_mapper.region, Region::new(3800, 0, 11400, 9500));
    assert!(state.tablet_mapper.anchors.is_rectangle());
}

#[test]
fn test_full_area_toggle_after_drag_restores_bounds() {
    let (mut controller, mut state) = refreshed();
    controller
        .handle_intent(
            &mut state,
            AppIntent::TabletAnchorDragged {
                index: 3,
                delta_px: Vec2::new(-30.0, 20.0),
                widget_size: TABLET_WIDGET,
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::FullAreaToggled { enabled: true })
        .expect("FullAreaToggled sollte ohne Fehler durchlaufen");

    assert!(state.tablet_mapper.full_area);
    assert_eq!(state.tablet_mapper.region, Region::new(0, 0, 15200, 9500));
}

#[test]
fn test_area_edit_is_clamped_into_tablet() {
    let (mut controller, mut state) = refreshed();

    controller
        .handle_intent(
            &mut state,
            AppIntent::TabletAreaEdited {
                region: Region::new(14000, 0, 4000, 9500),
            },
        )
        .expect("TabletAreaEdited sollte ohne Fehler durchlaufen");

    assert_eq!(state.tablet_mapper.region, Region::new(11200, 0, 4000, 9500));
    assert!(!state.tablet_mapper.full_area);
}

#[test]
fn test_curve_edits_update_curve_state() {
    let (mut controller, mut state) = refreshed();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CurvePointDragged {
                point: ControlPoint::First,
                delta: Vec2::new(0.25, -0.5),
            },
        )
        .expect("CurvePointDragged sollte ohne Fehler durchlaufen");
    assert_eq!(state.curve.curve.to_percent(), [25, 50, 100, 100]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CurvePointsEdited {
                points: [0.1, 0.2, 0.8, 0.9],
            },
        )
        .expect("CurvePointsEdited sollte ohne Fehler durchlaufen");
    assert_eq!(state.curve.curve.to_percent(), [10, 20, 80, 90]);
}

#[test]
fn test_area_edit_without_device_is_ignored() {
    let mut backend = FakeBackend::new();
    backend.devices.clear();
    let mut controller = AppController::new(Box::new(backend));
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::TabletAreaEdited {
                region: Region::new(0, 0, 10, 10),
            },
        )
        .expect("TabletAreaEdited ohne Gerät sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::TabletAnchorDragged {
                index: 0,
                delta_px: Vec2::new(60.0, 0.0),
                widget_size: TABLET_WIDGET,
            },
        )
        .expect("Drag ohne Gerät sollte ohne Fehler durchlaufen");

    assert_eq!(state.tablet_mapper, RegionMapperState::default());
    assert!(!state.tablet_mapper.interactive);
}

#[test]
fn test_refresh_after_device_vanished_resets_tablet_state() {
    let mut backend = FakeBackend::new();
    backend.area = Region::new(1000, 500, 7600, 4750);
    backend.curve = [10, 30, 70, 90];
    let mut controller = AppController::new(Box::new(backend));
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte ohne Fehler durchlaufen");
    assert!(state.tablet_mapper.interactive);

    // Tablet abgezogen
    let mut unplugged = FakeBackend::new();
    unplugged.devices.clear();
    let mut controller = AppController::new(Box::new(unplugged));
    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte ohne Fehler durchlaufen");

    assert!(state.current_device().is_none());
    assert_eq!(state.tablet_mapper, RegionMapperState::default());
    assert!(!state.tablet_mapper.interactive);
    assert_eq!(state.curve.curve, BezierCurve::linear());
}
