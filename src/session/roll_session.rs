// src/session/roll_session.rs

use log::{debug, info, warn};
use crate::dice::{DiceCatalog, DiceGroupType, DieType};
use crate::models::DieMotion;
use crate::resolution::{resolve_roll, RollOutcome, SettleDetector};
use crate::session::{clamp_dice_count, parse_dice_count, CountStatus};
use crate::utils::{DiceError, SettleConstants};

/// Where a roll session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollPhase {
    /// Nothing on the tray, or the configuration just changed.
    Idle,
    /// Dice are thrown and the settle detector is accumulating.
    Rolling,
    /// The dice settled and an outcome is available.
    Resolved,
}

/// The dice currently on the tray and what they rolled.
///
/// The host drives a session explicitly: [`RollSession::start_roll`] when the user throws,
/// then [`RollSession::tick`] once per simulation step with the motion of every physical die,
/// in the order given by [`RollSession::rolled_dice`]. The outcome is read exactly once, on
/// the tick at which the dice settle.
#[derive(Debug, Clone)]
pub struct RollSession {
    catalog: DiceCatalog,
    group: &'static DiceGroupType,
    dice_count: usize,
    rolled: Vec<&'static DiceGroupType>,
    detector: SettleDetector,
    outcome: Option<RollOutcome>,
    phase: RollPhase,
}

impl RollSession {
    /// Creates an idle session rolling one `group_name` group.
    ///
    /// # Errors
    /// Returns `UnknownDiceGroup` when the catalog has no such group.
    pub fn new(catalog: &DiceCatalog, group_name: &str, settle: SettleConstants) -> Result<Self, DiceError> {
        let group = catalog.group_type(group_name)?;
        Ok(Self::with_group(catalog, group, settle))
    }

    pub fn with_group(catalog: &DiceCatalog, group: &'static DiceGroupType, settle: SettleConstants) -> Self {
        Self {
            catalog: *catalog,
            group,
            dice_count: 1,
            rolled: Vec::new(),
            detector: SettleDetector::new(settle),
            outcome: None,
            phase: RollPhase::Idle,
        }
    }

    pub fn group(&self) -> &'static DiceGroupType {
        self.group
    }

    pub fn dice_count(&self) -> usize {
        self.dice_count
    }

    pub fn phase(&self) -> RollPhase {
        self.phase
    }

    /// Outcome of the last settled roll, until the session is cleared.
    pub fn outcome(&self) -> Option<&RollOutcome> {
        self.outcome.as_ref()
    }

    pub fn settle_timer(&self) -> f64 {
        self.detector.settle_timer()
    }

    /// Switches to another dice group and clears the tray.
    ///
    /// # Errors
    /// Returns `UnknownDiceGroup` and keeps the current selection when the name is unknown.
    pub fn select_group(&mut self, name: &str) -> Result<&'static DiceGroupType, DiceError> {
        match self.catalog.group_type(name) {
            Ok(group) => {
                debug!("Selected dice group {}", group.name);
                self.group = group;
                self.clear();
                Ok(group)
            }
            Err(e) => {
                warn!("{}, keeping {}", e, self.group.name);
                Err(e)
            }
        }
    }

    /// Sets how many groups the next roll throws and clears the tray.
    ///
    /// # Errors
    /// Returns `InvalidDiceCount` and keeps the current count when `count` is zero.
    pub fn set_dice_count(&mut self, count: usize) -> Result<CountStatus, DiceError> {
        if count == 0 {
            let e = DiceError::InvalidDiceCount(count.to_string());
            warn!("{}, keeping {}", e, self.dice_count);
            return Err(e);
        }
        let (count, status) = clamp_dice_count(count);
        self.apply_dice_count(count);
        Ok(status)
    }

    /// Same as [`RollSession::set_dice_count`] for text typed by the user.
    ///
    /// # Errors
    /// Returns `InvalidDiceCount` and keeps the current count when the text is not a positive
    /// integer.
    pub fn set_dice_count_from_input(&mut self, input: &str) -> Result<CountStatus, DiceError> {
        match parse_dice_count(input) {
            Ok((count, status)) => {
                self.apply_dice_count(count);
                Ok(status)
            }
            Err(e) => {
                warn!("{}, keeping {}", e, self.dice_count);
                Err(e)
            }
        }
    }

    fn apply_dice_count(&mut self, count: usize) {
        debug!("Dice count set to {}", count);
        self.dice_count = count;
        self.clear();
    }

    /// Discards any dice and result on the tray and returns to `Idle`.
    pub fn clear(&mut self) {
        self.rolled.clear();
        self.outcome = None;
        self.detector.clear();
        self.phase = RollPhase::Idle;
    }

    /// Throws a fresh set of dice, cancelling whatever roll was in progress.
    ///
    /// Returns the number of physical dice the host must now spawn and report on every tick.
    pub fn start_roll(&mut self) -> usize {
        self.clear();
        self.rolled = vec![self.group; self.dice_count];
        self.phase = RollPhase::Rolling;

        let physical = self.physical_dice_count();
        info!("Rolling {} x {} ({} dice)", self.dice_count, self.group.name, physical);
        physical
    }

    /// Number of physical dice in the current roll; a D100 group counts two.
    pub fn physical_dice_count(&self) -> usize {
        self.rolled.iter().map(|group| group.component_count()).sum()
    }

    /// Die type of every physical die in the current roll, in tick order.
    pub fn rolled_dice(&self) -> Vec<&'static DieType> {
        self.rolled
            .iter()
            .flat_map(|group| {
                let components: &'static [DieType] = group.components;
                components.iter()
            })
            .collect()
    }

    /// Feeds one simulation step.
    ///
    /// Returns the outcome on the tick at which the dice settle and `None` on every other tick.
    /// Ticks outside the `Rolling` phase are ignored.
    ///
    /// # Errors
    /// Returns `MotionCountMismatch` when `motions` does not hold one entry per physical die.
    pub fn tick(&mut self, dt: f64, motions: &[DieMotion]) -> Result<Option<&RollOutcome>, DiceError> {
        if self.phase != RollPhase::Rolling {
            return Ok(None);
        }

        let expected = self.physical_dice_count();
        if motions.len() != expected {
            return Err(DiceError::MotionCountMismatch {
                expected,
                actual: motions.len(),
            });
        }

        if !self.detector.observe(dt, motions) {
            return Ok(None);
        }

        let outcome = resolve_roll(&self.rolled, motions)?;
        info!("Rolled {} (total {})", outcome.display_value, outcome.total);
        self.phase = RollPhase::Resolved;
        let outcome: &RollOutcome = self.outcome.insert(outcome);
        Ok(Some(outcome))
    }
}
