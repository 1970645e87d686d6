
use air_mouse::gestures::{classify_fingers, FingerStates, FingerTips, GestureClassifier, Mode};
use air_mouse::landmarks::{Finger, LandmarkFrame, Point};
use air_mouse::AirMouseError;
use hand_fixture::Hand;
use proptest::prelude::*;

fn classify(hand: &Hand) -> Mode {
    let frame = hand.frame();
    let fingers = classify_fingers(&frame).unwrap();
    let tips = FingerTips::from_frame(&frame).unwrap();
    GestureClassifier::new(30.0).classify(&fingers, &tips)
}

#[test]
fn finger_states_follow_fixture() {
    let frame = Hand::new().fingers([true, true, false, true, false]).frame();
    let fingers = classify_fingers(&frame).unwrap();
    assert_eq!(fingers.as_array(), [true, true, false, true, false]);
    assert_eq!(fingers.count_up(), 3);
    assert!(fingers.is_up(Finger::Ring));
}

#[test]
fn short_frame_is_invalid() {
    let frame = LandmarkFrame::from_points(&[(1.0_f32, 1.0_f32); 20][..]);
    assert_eq!(
        classify_fingers(&frame),
        Err(AirMouseError::InvalidFrame {
            expected: 21,
            actual: 20
        })
    );
}

#[test]
fn tip_level_with_pip_is_folded() {
    let mut points = vec![(0.0_f32, 0.0_f32); 21];
    points[6] = (10.0, 100.0);
    points[8] = (10.0, 100.0);
    let frame = LandmarkFrame::from_points(&points[..]);
    assert!(!classify_fingers(&frame).unwrap().index);
}

#[test]
fn each_pinch_maps_to_its_mode() {
    assert_eq!(classify(&Hand::pointing().pinch(Finger::Index)), Mode::LeftPinch);
    assert_eq!(classify(&Hand::pointing().pinch(Finger::Middle)), Mode::RightPinch);
    assert_eq!(classify(&Hand::pointing().pinch(Finger::Ring)), Mode::DoublePinch);
}

#[test]
fn left_pinch_preempts_scroll() {
    assert_eq!(classify(&Hand::scrolling()), Mode::Scroll);
    assert_eq!(classify(&Hand::scrolling().pinch(Finger::Index)), Mode::LeftPinch);
}

#[test]
fn no_index_is_idle() {
    assert_eq!(classify(&Hand::new()), Mode::Idle);
    assert_eq!(
        classify(&Hand::new().fingers([true, false, true, true, true])),
        Mode::Idle
    );
}

fn tips_apart() -> FingerTips {
    FingerTips {
        thumb: Point::new(0.0, 0.0),
        index: Point::new(200.0, 0.0),
        middle: Point::new(0.0, 200.0),
        ring: Point::new(200.0, 200.0),
    }
}

proptest! {
    #[test]
    fn index_alone_always_moves(thumb in any::<bool>(), pinky in any::<bool>(), threshold in 1.0f32..150.0) {
        let fingers = FingerStates::from([thumb, true, false, false, pinky]);
        let mode = GestureClassifier::new(threshold).classify(&fingers, &tips_apart());
        prop_assert_eq!(mode, Mode::Move);
    }

    #[test]
    fn index_pinch_beats_everything(
        up in proptest::array::uniform5(any::<bool>()),
        dx in -20.0f32..20.0,
        dy in -20.0f32..20.0,
    ) {
        let mut tips = tips_apart();
        tips.index = Point::new(dx, dy);
        tips.middle = Point::new(-dy, dx);
        let mode = GestureClassifier::new(30.0).classify(&FingerStates::from(up), &tips);
        prop_assert_eq!(mode, Mode::LeftPinch);
    }

    #[test]
    fn mode_is_pinch_iff_some_tip_is_close(
        up in proptest::array::uniform5(any::<bool>()),
        middle_x in 0.0f32..60.0,
        ring_x in 0.0f32..60.0,
    ) {
        let mut tips = tips_apart();
        tips.middle = Point::new(middle_x, 0.0);
        tips.ring = Point::new(0.0, ring_x);
        let mode = GestureClassifier::new(30.0).classify(&FingerStates::from(up), &tips);
        prop_assert_eq!(mode.is_pinch(), middle_x < 30.0 || ring_x < 30.0);
        if middle_x < 30.0 {
            prop_assert_eq!(mode, Mode::RightPinch);
        }
    }
}
