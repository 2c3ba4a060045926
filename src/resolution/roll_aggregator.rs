// src/resolution/roll_aggregator.rs

use log::error;
use crate::dice::{DiceGroupRollResult, DiceGroupType, DieFace};
use crate::models::{DieMotion, Quaternion};
use crate::resolution::resolve_face;
use crate::utils::DiceError;

/// The settled faces of one dice group and their combined result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup {
    pub group_name: &'static str,
    /// One face per component die, in component order.
    pub faces: Vec<DieFace>,
    pub result: DiceGroupRollResult,
}

/// Display string and total over every group of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RollTotal {
    /// Group results joined by single spaces, in roll order.
    pub display_value: String,
    pub total: u32,
}

/// Everything read from one settled roll.
#[derive(Debug, Clone, PartialEq)]
pub struct RollOutcome {
    pub groups: Vec<ResolvedGroup>,
    pub display_value: String,
    pub total: u32,
}

/// Resolves each component die of `group` from its rotation and combines the faces.
///
/// # Errors
/// Returns `ComponentCountMismatch` when `rotations` does not hold one rotation per component.
pub fn resolve_group(group: &DiceGroupType, rotations: &[Quaternion]) -> Result<ResolvedGroup, DiceError> {
    if rotations.len() != group.component_count() {
        return Err(DiceError::ComponentCountMismatch {
            expected: group.component_count(),
            actual: rotations.len(),
        });
    }

    let faces = group
        .components
        .iter()
        .zip(rotations)
        .map(|(die, rotation)| resolve_face(rotation, die.faces).copied())
        .collect::<Result<Vec<DieFace>, DiceError>>()?;
    let result = group.combine(&faces)?;

    Ok(ResolvedGroup {
        group_name: group.name,
        faces,
        result,
    })
}

/// Sums and space-joins the group results.
///
/// # Example
/// ```
/// use rs_dice::dice::DiceGroupRollResult;
/// use rs_dice::resolution::aggregate_results;
///
/// let results = [
///     DiceGroupRollResult { display_value: "4".to_string(), numeric_value: 4 },
///     DiceGroupRollResult { display_value: "91".to_string(), numeric_value: 91 },
/// ];
/// let total = aggregate_results(&results);
///
/// assert_eq!(total.display_value, "4 91");
/// assert_eq!(total.total, 95);
/// ```
pub fn aggregate_results(results: &[DiceGroupRollResult]) -> RollTotal {
    RollTotal {
        display_value: results
            .iter()
            .map(|result| result.display_value.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        total: results.iter().map(|result| result.numeric_value).sum(),
    }
}

/// Resolves a whole roll.
///
/// `motions` lists the physical dice group by group, each group's dice in component order.
///
/// # Errors
/// * `NoTrackedDice` if `groups` is empty.
/// * `MotionCountMismatch` if `motions` does not hold exactly one entry per physical die.
pub fn resolve_roll(groups: &[&DiceGroupType], motions: &[DieMotion]) -> Result<RollOutcome, DiceError> {
    if groups.is_empty() {
        return Err(DiceError::NoTrackedDice);
    }

    let expected: usize = groups.iter().map(|group| group.component_count()).sum();
    if motions.len() != expected {
        return Err(DiceError::MotionCountMismatch {
            expected,
            actual: motions.len(),
        });
    }

    let mut resolved = Vec::with_capacity(groups.len());
    let mut offset = 0;
    for group in groups {
        let count = group.component_count();
        let rotations: Vec<Quaternion> = motions[offset..offset + count]
            .iter()
            .map(|motion| motion.rotation)
            .collect();
        offset += count;

        match resolve_group(group, &rotations) {
            Ok(group_result) => resolved.push(group_result),
            Err(e) => {
                error!("Error resolving {} group: {}", group.name, e);
                return Err(e);
            }
        }
    }

    let results: Vec<DiceGroupRollResult> = resolved.iter().map(|group| group.result.clone()).collect();
    let RollTotal { display_value, total } = aggregate_results(&results);

    Ok(RollOutcome {
        groups: resolved,
        display_value,
        total,
    })
}
