use std::sync::Arc;

use air_mouse::gestures::{ActionEvent, MouseButton};
use air_mouse::input::{
    DryRunSink, FailSafeSink, FixedCursorPosition, FixedScreenGeometry, InputSink,
    MockInputSink, ScreenGeometry,
};
use air_mouse::landmarks::Point;
use air_mouse::AirMouseError;

#[test]
fn mock_records_in_order() {
    let (mut sink, handle) = MockInputSink::new();
    sink.execute(&ActionEvent::ButtonDown(MouseButton::Left)).unwrap();
    sink.execute(&ActionEvent::Scroll(-4)).unwrap();
    assert_eq!(
        handle.events(),
        vec![
            ActionEvent::ButtonDown(MouseButton::Left),
            ActionEvent::Scroll(-4)
        ]
    );
}

#[test]
fn dry_run_counts_without_failing() {
    let mut sink = DryRunSink::default();
    sink.execute(&ActionEvent::RightClick).unwrap();
    sink.execute(&ActionEvent::PointerMove(Point::new(1.0, 2.0))).unwrap();
    assert_eq!(sink.executed(), 2);
}

#[test]
fn fixed_geometry_reports_override() {
    let geometry = FixedScreenGeometry::new(2560.0, 1440.0);
    assert_eq!(geometry.screen_size().unwrap(), (2560.0, 1440.0));
}

#[test]
fn fail_safe_passes_events_away_from_corners() {
    let (mock, handle) = MockInputSink::new();
    let cursor = FixedCursorPosition::new(Some(Point::new(960.0, 540.0)));
    let mut sink = FailSafeSink::new(mock, Arc::new(cursor), (1920.0, 1080.0), 0.0);
    sink.execute(&ActionEvent::DoubleClick).unwrap();
    assert_eq!(handle.events(), vec![ActionEvent::DoubleClick]);
}

#[test]
fn fail_safe_uses_commanded_position_without_cursor() {
    let (mock, handle) = MockInputSink::new();
    let mut sink = FailSafeSink::new(
        mock,
        Arc::new(FixedCursorPosition::default()),
        (1920.0, 1080.0),
        10.0,
    );

    sink.execute(&ActionEvent::PointerMove(Point::new(1915.0, 5.0))).unwrap();
    let err = sink.execute(&ActionEvent::RightClick).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AirMouseError>(),
        Some(&AirMouseError::FailSafeTriggered { x: 1915.0, y: 5.0 })
    );
    assert_eq!(handle.len(), 1);
}

#[test]
fn fail_safe_follows_live_cursor() {
    let (mock, handle) = MockInputSink::new();
    let cursor = FixedCursorPosition::new(Some(Point::new(500.0, 500.0)));
    let mut sink = FailSafeSink::new(mock, Arc::new(cursor.clone()), (1920.0, 1080.0), 0.0);

    sink.execute(&ActionEvent::RightClick).unwrap();
    cursor.set(Some(Point::new(1919.0, 1079.0)));
    assert!(sink.execute(&ActionEvent::RightClick).is_err());
    assert_eq!(handle.len(), 1);
}
