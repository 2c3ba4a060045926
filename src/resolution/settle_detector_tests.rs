// src/resolution/settle_detector_tests.rs

use crate::assert_float_eq;
use crate::models::{DieMotion, Quaternion};
use crate::resolution::SettleDetector;
use crate::utils::SettleConstants;

fn moving(speed: f64) -> DieMotion {
    DieMotion::new(Quaternion::identity(), (speed, 0.0, 0.0), (0.0, 0.0, 0.0))
}

fn spinning(speed: f64) -> DieMotion {
    DieMotion::new(Quaternion::identity(), (0.0, 0.0, 0.0), (0.0, speed, 0.0))
}

fn resting() -> DieMotion {
    DieMotion::at_rest(Quaternion::identity())
}

#[test]
fn test_never_fires_while_moving() {
    let mut detector = SettleDetector::default();
    for _ in 0..1000 {
        assert!(!detector.observe(0.1, &[moving(0.1)]));
        assert!(!detector.observe(0.1, &[spinning(0.25)]));
    }
    assert_float_eq(detector.settle_timer(), 0.0, 1e-12, None);
}

#[test]
fn test_fires_once_after_settle_duration() {
    let mut detector = SettleDetector::default();
    let dice = [resting(), resting()];

    for _ in 0..3 {
        assert!(!detector.observe(0.25, &dice));
    }
    assert!(detector.observe(0.25, &dice), "Fires when the timer reaches one second");
    assert!(detector.has_fired());

    for _ in 0..100 {
        assert!(!detector.observe(0.25, &dice), "Fires only once per roll");
    }
}

#[test]
fn test_fires_with_frame_sized_ticks() {
    let mut detector = SettleDetector::default();
    let dice = [resting()];
    let dt = 1.0 / 60.0;

    let mut fired_at = None;
    for frame in 1..=120 {
        if detector.observe(dt, &dice) {
            assert!(fired_at.is_none());
            fired_at = Some(frame);
        }
    }
    assert_eq!(fired_at, Some(60));
}

#[test]
fn test_motion_resets_timer() {
    let mut detector = SettleDetector::default();
    let dice = [resting()];

    assert!(!detector.observe(0.5, &dice));
    assert!(!detector.observe(0.4, &dice));
    assert_float_eq(detector.settle_timer(), 0.9, 1e-12, None);

    assert!(!detector.observe(0.016, &[moving(0.5)]));
    assert_float_eq(detector.settle_timer(), 0.0, 1e-12, Some("A single moving tick resets the timer"));

    assert!(!detector.observe(0.5, &dice));
    assert!(detector.observe(0.5, &dice));
}

#[test]
fn test_velocity_sums_across_dice() {
    let mut detector = SettleDetector::default();
    // Each die alone is below the threshold, together they are not.
    let dice = [moving(0.06), moving(0.06)];
    for _ in 0..20 {
        assert!(!detector.observe(0.1, &dice));
    }

    let slow = [moving(0.04), moving(0.04)];
    let fired = (0..10).any(|_| detector.observe(0.1, &slow));
    assert!(fired);
}

#[test]
fn test_l1_norm_is_used() {
    // Euclidean length 0.0707, L1 norm 0.1: moving.
    let diagonal = DieMotion::new(Quaternion::identity(), (0.05, 0.05, 0.0), (0.0, 0.0, 0.0));
    let mut detector = SettleDetector::default();
    for _ in 0..20 {
        assert!(!detector.observe(0.1, &[diagonal]));
    }
}

#[test]
fn test_timer_is_clamped_to_duration() {
    let mut detector = SettleDetector::new(SettleConstants::new(None, None, Some(0.8)));
    assert!(detector.observe(5.0, &[resting()]));
    assert_float_eq(detector.settle_timer(), 0.8, 1e-12, None);
}

#[test]
fn test_no_dice_never_settles() {
    let mut detector = SettleDetector::default();
    for _ in 0..100 {
        assert!(!detector.observe(0.5, &[]));
    }
    assert!(!detector.has_fired());
}

#[test]
fn test_empty_tick_clears_progress() {
    let mut detector = SettleDetector::default();
    assert!(!detector.observe(0.9, &[resting()]));
    assert!(!detector.observe(0.1, &[]));
    assert_float_eq(detector.settle_timer(), 0.0, 1e-12, None);
}

#[test]
fn test_clear_rearms() {
    let mut detector = SettleDetector::default();
    assert!(detector.observe(1.0, &[resting()]));
    detector.clear();
    assert!(!detector.has_fired());
    assert_float_eq(detector.settle_timer(), 0.0, 1e-12, None);
    assert!(detector.observe(1.0, &[resting()]), "Fires again after being cleared");
}

#[test]
fn test_invalid_tick_durations_do_not_advance() {
    let mut detector = SettleDetector::default();
    assert!(!detector.observe(-1.0, &[resting()]));
    assert!(!detector.observe(f64::NAN, &[resting()]));
    assert_float_eq(detector.settle_timer(), 0.0, 1e-12, None);
}
