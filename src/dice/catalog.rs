// src/dice/catalog.rs

use crate::dice::{geometry, DiceGroupType, DieType, GroupCombination};
use crate::utils::DiceError;

pub const D4: DieType = DieType::new("D4", &geometry::D4_FACES, false);
pub const D6: DieType = DieType::new("D6", &geometry::D6_FACES, false);
pub const D8: DieType = DieType::new("D8", &geometry::D8_FACES, false);
pub const D10: DieType = DieType::new("D10", &geometry::D10_FACES, true);
pub const D_PERCENT: DieType = DieType::new("D%", &geometry::D_PERCENT_FACES, true);
pub const D12: DieType = DieType::new("D12", &geometry::D12_FACES, true);
pub const D20: DieType = DieType::new("D20", &geometry::D20_FACES, true);

pub const DIE_TYPES: [DieType; 7] = [D4, D6, D8, D10, D_PERCENT, D12, D20];

/// Ones die first, tens die second.
pub const D100_COMPONENTS: [DieType; 2] = [D10, D_PERCENT];

pub const DICE_GROUP_TYPES: [DiceGroupType; 8] = [
    DiceGroupType::simple(&D4),
    DiceGroupType::simple(&D6),
    DiceGroupType::simple(&D8),
    DiceGroupType::simple(&D10),
    DiceGroupType::simple(&D_PERCENT),
    DiceGroupType::simple(&D12),
    DiceGroupType::simple(&D20),
    DiceGroupType::composite("D100", &D100_COMPONENTS, GroupCombination::Percentile),
];

/// Read-only lookup of die types and dice groups by name.
///
/// Names match ASCII case-insensitively, so `"d20"` finds `D20`.
#[derive(Debug, Clone, Copy)]
pub struct DiceCatalog {
    die_types: &'static [DieType],
    group_types: &'static [DiceGroupType],
}

pub static STANDARD_CATALOG: DiceCatalog = DiceCatalog::standard();

impl Default for DiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl DiceCatalog {
    /// D4, D6, D8, D10, D%, D12, D20 and the D100 group.
    pub const fn standard() -> Self {
        Self {
            die_types: &DIE_TYPES,
            group_types: &DICE_GROUP_TYPES,
        }
    }

    /// Looks up a die type.
    ///
    /// # Errors
    /// Returns `UnknownDieType` when no entry has this name.
    pub fn die_type(&self, name: &str) -> Result<&'static DieType, DiceError> {
        let die_types: &'static [DieType] = self.die_types;
        die_types
            .iter()
            .find(|die| die.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DiceError::UnknownDieType(name.to_string()))
    }

    /// Looks up a dice group.
    ///
    /// # Errors
    /// Returns `UnknownDiceGroup` when no entry has this name.
    pub fn group_type(&self, name: &str) -> Result<&'static DiceGroupType, DiceError> {
        let group_types: &'static [DiceGroupType] = self.group_types;
        group_types
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DiceError::UnknownDiceGroup(name.to_string()))
    }

    pub fn die_types(&self) -> &'static [DieType] {
        self.die_types
    }

    pub fn group_types(&self) -> &'static [DiceGroupType] {
        self.group_types
    }
}
