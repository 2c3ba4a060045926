// src/resolution/roll_aggregator_tests.rs

use crate::dice::{DiceGroupRollResult, DieType, STANDARD_CATALOG, D10, D20, D6, D_PERCENT};
use crate::models::{DieMotion, Quaternion};
use crate::resolution::{aggregate_results, resolve_group, resolve_roll};
use crate::utils::{DiceError, WORLD_UP};

/// Orientation that leaves the face labelled `label` pointing up.
fn showing(die: &DieType, label: &str) -> Quaternion {
    let face = die.face_by_label(label).unwrap();
    Quaternion::rotation_between(face.normal, WORLD_UP)
}

fn resting(die: &DieType, label: &str) -> DieMotion {
    DieMotion::at_rest(showing(die, label))
}

#[test]
fn test_resolve_simple_group() {
    let d20 = STANDARD_CATALOG.group_type("D20").unwrap();
    let resolved = resolve_group(d20, &[showing(&D20, "17")]).unwrap();
    assert_eq!(resolved.group_name, "D20");
    assert_eq!(resolved.faces.len(), 1);
    assert_eq!(resolved.result.display_value, "17");
    assert_eq!(resolved.result.numeric_value, 17);
}

#[test]
fn test_resolve_d100_group() {
    let d100 = STANDARD_CATALOG.group_type("D100").unwrap();

    let resolved = resolve_group(d100, &[showing(&D10, "1"), showing(&D_PERCENT, "90")]).unwrap();
    assert_eq!(resolved.faces[0].display_value, "1");
    assert_eq!(resolved.faces[1].display_value, "90");
    assert_eq!(resolved.result.display_value, "91");
    assert_eq!(resolved.result.numeric_value, 91);

    let resolved = resolve_group(d100, &[showing(&D10, "0"), showing(&D_PERCENT, "00")]).unwrap();
    assert_eq!(resolved.result.display_value, "00");
    assert_eq!(resolved.result.numeric_value, 100);

    let resolved = resolve_group(d100, &[showing(&D10, "0"), showing(&D_PERCENT, "30")]).unwrap();
    assert_eq!(resolved.result.display_value, "30");
    assert_eq!(resolved.result.numeric_value, 30);
}

#[test]
fn test_resolve_group_rejects_wrong_rotation_count() {
    let d100 = STANDARD_CATALOG.group_type("D100").unwrap();
    assert_eq!(
        resolve_group(d100, &[Quaternion::identity()]),
        Err(DiceError::ComponentCountMismatch { expected: 2, actual: 1 })
    );
}

#[test]
fn test_aggregate_joins_and_sums() {
    let results = [
        DiceGroupRollResult { display_value: "3".to_string(), numeric_value: 3 },
        DiceGroupRollResult { display_value: "0".to_string(), numeric_value: 10 },
        DiceGroupRollResult { display_value: "00".to_string(), numeric_value: 100 },
    ];
    let total = aggregate_results(&results);
    assert_eq!(total.display_value, "3 0 00");
    assert_eq!(total.total, 113);

    let empty = aggregate_results(&[]);
    assert_eq!(empty.display_value, "");
    assert_eq!(empty.total, 0);
}

#[test]
fn test_resolve_roll_of_several_d6() {
    let d6 = STANDARD_CATALOG.group_type("D6").unwrap();
    let motions = [resting(&D6, "2"), resting(&D6, "6"), resting(&D6, "4")];
    let outcome = resolve_roll(&[d6, d6, d6], &motions).unwrap();

    assert_eq!(outcome.groups.len(), 3);
    assert_eq!(outcome.display_value, "2 6 4");
    assert_eq!(outcome.total, 12);
}

#[test]
fn test_resolve_roll_of_d100_pairs() {
    let d100 = STANDARD_CATALOG.group_type("D100").unwrap();
    let motions = [
        resting(&D10, "7"),
        resting(&D_PERCENT, "40"),
        resting(&D10, "0"),
        resting(&D_PERCENT, "00"),
    ];
    let outcome = resolve_roll(&[d100, d100], &motions).unwrap();

    assert_eq!(outcome.display_value, "47 00");
    assert_eq!(outcome.total, 147);
    assert_eq!(outcome.groups[1].result.numeric_value, 100);
}

#[test]
fn test_resolve_roll_of_mixed_groups() {
    let d6 = STANDARD_CATALOG.group_type("D6").unwrap();
    let d100 = STANDARD_CATALOG.group_type("D100").unwrap();
    let d20 = STANDARD_CATALOG.group_type("D20").unwrap();
    let motions = [
        resting(&D6, "5"),
        resting(&D10, "9"),
        resting(&D_PERCENT, "60"),
        resting(&D20, "20"),
    ];
    let outcome = resolve_roll(&[d6, d100, d20], &motions).unwrap();

    assert_eq!(outcome.display_value, "5 69 20");
    assert_eq!(outcome.total, 94);
    assert_eq!(outcome.groups[1].group_name, "D100");
}

#[test]
fn test_resolve_roll_ignores_velocities() {
    let d6 = STANDARD_CATALOG.group_type("D6").unwrap();
    let motion = DieMotion::new(showing(&D6, "3"), (5.0, 0.0, 0.0), (0.0, 9.0, 0.0));
    let outcome = resolve_roll(&[d6], &[motion]).unwrap();
    assert_eq!(outcome.total, 3);
}

#[test]
fn test_resolve_roll_requires_groups() {
    assert_eq!(resolve_roll(&[], &[]), Err(DiceError::NoTrackedDice));
}

#[test]
fn test_resolve_roll_rejects_motion_count_mismatch() {
    let d100 = STANDARD_CATALOG.group_type("D100").unwrap();
    let d6 = STANDARD_CATALOG.group_type("D6").unwrap();
    let motions = [DieMotion::default(); 2];
    assert_eq!(
        resolve_roll(&[d100, d6], &motions),
        Err(DiceError::MotionCountMismatch { expected: 3, actual: 2 })
    );
}
