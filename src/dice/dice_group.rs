use std::fmt;
use crate::dice::{DieFace, DieType};
use crate::utils::DiceError;

/// How the resolved faces of a dice group turn into a single result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCombination {
    /// One die; its face is the result.
    Simple,
    /// A ones die and a tens die read together as 1..=100.
    Percentile,
}

impl GroupCombination {
    pub fn arity(&self) -> usize {
        match self {
            GroupCombination::Simple => 1,
            GroupCombination::Percentile => 2,
        }
    }
}

/// One rollable unit made of one or more physical dice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiceGroupType {
    pub name: &'static str,
    pub components: &'static [DieType],
    pub combination: GroupCombination,
}

/// Result of one settled dice group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceGroupRollResult {
    pub display_value: String,
    pub numeric_value: u32,
}

impl fmt::Display for DiceGroupRollResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_value)
    }
}

impl DiceGroupType {
    /// A group holding exactly one die of the given type.
    pub const fn simple(die: &'static DieType) -> Self {
        Self {
            name: die.name,
            components: std::slice::from_ref(die),
            combination: GroupCombination::Simple,
        }
    }

    pub const fn composite(name: &'static str, components: &'static [DieType], combination: GroupCombination) -> Self {
        Self { name, components, combination }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Combines the resolved faces, given in component order.
    ///
    /// # Errors
    /// Returns `ComponentCountMismatch` when `faces` does not have one entry per component.
    pub fn combine(&self, faces: &[DieFace]) -> Result<DiceGroupRollResult, DiceError> {
        if faces.len() != self.components.len() || faces.len() != self.combination.arity() {
            return Err(DiceError::ComponentCountMismatch {
                expected: self.components.len(),
                actual: faces.len(),
            });
        }

        Ok(match self.combination {
            GroupCombination::Simple => DiceGroupRollResult {
                display_value: faces[0].display_value.to_string(),
                numeric_value: faces[0].numeric_value,
            },
            GroupCombination::Percentile => combine_percentile(&faces[0], &faces[1]),
        })
    }
}

/// Reads a ones die and a tens die as one percentile roll.
///
/// The total is `ones mod 10 + tens mod 100`, except that `"00"` with `"0"` is 100.
/// The label keeps the tens digit of the tens die and takes the ones digit from the ones die.
///
/// # Example
/// ```
/// use rs_dice::dice::{combine_percentile, DieFace};
///
/// let ones = DieFace::new("1", 1, (0.0, 1.0, 0.0));
/// let tens = DieFace::new("90", 90, (0.0, 1.0, 0.0));
/// let result = combine_percentile(&ones, &tens);
///
/// assert_eq!(result.numeric_value, 91);
/// assert_eq!(result.display_value, "91");
/// ```
pub fn combine_percentile(ones: &DieFace, tens: &DieFace) -> DiceGroupRollResult {
    let raw = ones.numeric_value % 10 + tens.numeric_value % 100;
    let numeric_value = if raw == 0 { 100 } else { raw };

    let cut = tens.display_value.len().saturating_sub(ones.display_value.len());
    let tens_digits = tens.display_value.get(..cut).unwrap_or_default();

    DiceGroupRollResult {
        display_value: format!("{}{}", tens_digits, ones.display_value),
        numeric_value,
    }
}
