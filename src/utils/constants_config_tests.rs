// src/utils/constants_config_tests.rs

use crate::assert_float_eq;
use crate::utils::{DiceError, ErrorKind, SettleConstants, ThrowConstants, DEFAULT_SETTLE_CONSTANTS};

#[test]
fn test_create_settle_constants() {
    let custom = SettleConstants::new(Some(0.2), Some(0.3), Some(0.8));
    assert_float_eq(custom.linear_velocity_threshold, 0.2, 1e-12, None);
    assert_float_eq(custom.angular_velocity_threshold, 0.3, 1e-12, None);
    assert_float_eq(custom.settle_duration, 0.8, 1e-12, None);

    let partial = SettleConstants::new(None, None, Some(0.8));
    assert_float_eq(partial.linear_velocity_threshold, DEFAULT_SETTLE_CONSTANTS.linear_velocity_threshold, 1e-12, None);
    assert_float_eq(partial.angular_velocity_threshold, 0.1, 1e-12, None);
    assert_float_eq(partial.settle_duration, 0.8, 1e-12, None);
}

#[test]
fn test_default_settle_constants() {
    let constants = SettleConstants::default();
    assert_eq!(constants, DEFAULT_SETTLE_CONSTANTS);
    assert_float_eq(constants.settle_duration, 1.0, 1e-12, Some("Richer variant uses a one second settle"));
}

#[test]
fn test_is_at_rest_is_strict() {
    let constants = SettleConstants::default();
    assert!(constants.is_at_rest(0.0, 0.0));
    assert!(constants.is_at_rest(0.099, 0.099));
    assert!(!constants.is_at_rest(0.1, 0.0), "Threshold itself is not at rest");
    assert!(!constants.is_at_rest(0.0, 0.1), "Threshold itself is not at rest");
}

#[test]
fn test_create_throw_constants() {
    let throw = ThrowConstants::new(None, Some(3.0), None, None, Some(1.0));
    assert_float_eq(throw.spawn_half_extent, 1.0, 1e-12, None);
    assert_float_eq(throw.spawn_height, 3.0, 1e-12, None);
    assert_float_eq(throw.lateral_impulse, 2.0, 1e-12, None);
    assert_float_eq(throw.vertical_impulse, 6.0, 1e-12, None);
    assert_float_eq(throw.torque_half_range, 1.0, 1e-12, None);
}

#[test]
fn test_error_kinds() {
    assert_eq!(DiceError::UnknownDieType("D7".to_string()).kind(), ErrorKind::NotFound);
    assert_eq!(DiceError::UnknownDiceGroup("D3".to_string()).kind(), ErrorKind::NotFound);
    assert_eq!(DiceError::InvalidDiceCount("abc".to_string()).kind(), ErrorKind::InvalidArgument);
    assert_eq!(DiceError::EmptyFaceTable.kind(), ErrorKind::InvalidArgument);
    assert_eq!(DiceError::NoTrackedDice.kind(), ErrorKind::InvalidState);
}

#[test]
fn test_error_display() {
    assert_eq!(DiceError::UnknownDieType("D7".to_string()).to_string(), "Unknown die type: D7");
    assert_eq!(
        DiceError::MotionCountMismatch { expected: 2, actual: 1 }.to_string(),
        "Expected motion for 2 dice, got 1"
    );
}
