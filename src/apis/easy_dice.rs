// src/apis/easy_dice.rs

use std::borrow::Cow;
#[cfg(feature = "throws")]
use rand::Rng;
use crate::dice::{DiceCatalog, DieFace, DieType, STANDARD_CATALOG};
use crate::models::Quaternion;
use crate::resolution::resolve_face;
use crate::session::RollSession;
#[cfg(feature = "throws")]
use crate::session::{DieLaunch, ThrowGenerator};
use crate::utils::{DiceError, SettleConstants, ThrowConstants};

/// A simplified interface for reading dice.
///
/// This struct bundles the standard catalog with the settle and throw configuration so a host
/// can look up dice, read a single die from its orientation, or run full roll sessions
/// without wiring the individual modules together.
pub struct EasyDice {
    catalog: &'static DiceCatalog,
    settle: SettleConstants,
    throws: ThrowConstants,
}

impl Default for EasyDice {
    fn default() -> Self {
        Self::new()
    }
}

impl EasyDice {

    /// Creates a new `EasyDice` instance with the standard catalog and default constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_dice::apis::easy_dice::EasyDice;
    ///
    /// let dice = EasyDice::new();
    /// ```
    ///
    /// # Notes
    ///
    /// The default constants are:
    /// - Settle thresholds: 0.1 for both summed linear and angular speed
    /// - Settle duration: 1.0 s
    /// - Spawn: x and z within ±1.0, height 1.5
    /// - Impulse: lateral within ±2.0, vertical 6.0
    /// - Torque: each component within ±4.0
    pub fn new() -> Self {
        Self {
            catalog: &STANDARD_CATALOG,
            settle: SettleConstants::default(),
            throws: ThrowConstants::default(),
        }
    }

    /// Creates a new `EasyDice` instance with custom settle and throw constants.
    ///
    /// # Arguments
    ///
    /// * `settle` - Thresholds and duration used to decide that the dice stopped moving
    /// * `throws` - Ranges used to place and kick thrown dice
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_dice::apis::easy_dice::EasyDice;
    /// use rs_dice::utils::{SettleConstants, ThrowConstants};
    ///
    /// // Read results sooner, from a lower drop height
    /// let dice = EasyDice::with_custom_constants(
    ///     SettleConstants::new(None, None, Some(0.8)),
    ///     ThrowConstants::new(None, Some(0.5), None, None, None),
    /// );
    /// assert_eq!(dice.settle_constants().settle_duration, 0.8);
    /// ```
    pub fn with_custom_constants(settle: SettleConstants, throws: ThrowConstants) -> Self {
        Self {
            catalog: &STANDARD_CATALOG,
            settle,
            throws,
        }
    }

    pub fn catalog(&self) -> &'static DiceCatalog {
        self.catalog
    }

    pub fn settle_constants(&self) -> &SettleConstants {
        &self.settle
    }

    pub fn throw_constants(&self) -> &ThrowConstants {
        &self.throws
    }

    /// Looks up a die type by name, ignoring ASCII case.
    ///
    /// # Returns
    ///
    /// * `Ok(&DieType)` - The catalog entry
    /// * `Err(DiceError::UnknownDieType)` - If no die has that name
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_dice::apis::easy_dice::EasyDice;
    ///
    /// let dice = EasyDice::new();
    /// assert_eq!(dice.die_type("d12").unwrap().side_count(), 12);
    /// assert!(dice.die_type("D7").is_err());
    /// ```
    pub fn die_type(&self, name: &str) -> Result<&'static DieType, DiceError> {
        self.catalog.die_type(name)
    }

    /// Reads the face of a single die from its orientation.
    ///
    /// # Arguments
    ///
    /// * `die_name` - Name of the die type, e.g. `"D20"`
    /// * `rotation` - The die's orientation as reported by the physics host
    ///
    /// # Returns
    ///
    /// * `Ok(DieFace)` - The face pointing up
    /// * `Err(DiceError::UnknownDieType)` - If the die type is unknown
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_dice::apis::easy_dice::EasyDice;
    /// use rs_dice::models::Quaternion;
    ///
    /// let dice = EasyDice::new();
    ///
    /// // An unrotated D6 shows 1
    /// let face = dice.resolve("D6", &Quaternion::identity()).unwrap();
    /// assert_eq!(face.numeric_value, 1);
    /// ```
    pub fn resolve(&self, die_name: &str, rotation: &Quaternion) -> Result<DieFace, DiceError> {
        let die = self.die_type(die_name)?;
        resolve_face(rotation, die.faces).copied()
    }

    /// Label of `face` as printed on the named die, with the period that tells 6 from 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_dice::apis::easy_dice::EasyDice;
    ///
    /// let dice = EasyDice::new();
    /// let d20 = dice.die_type("D20").unwrap();
    /// let nine = d20.face_by_label("9").unwrap();
    /// assert_eq!(dice.rendered_label("D20", nine).unwrap(), "9.");
    /// ```
    pub fn rendered_label(&self, die_name: &str, face: &DieFace) -> Result<Cow<'static, str>, DiceError> {
        Ok(self.die_type(die_name)?.face_label(face))
    }

    /// Starts an idle roll session for the named dice group.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_dice::apis::easy_dice::EasyDice;
    ///
    /// let dice = EasyDice::new();
    /// let mut session = dice.new_session("D100").unwrap();
    /// session.set_dice_count(3).unwrap();
    ///
    /// // Three D100 groups are six physical dice
    /// assert_eq!(session.start_roll(), 6);
    /// ```
    pub fn new_session(&self, group_name: &str) -> Result<RollSession, DiceError> {
        RollSession::new(self.catalog, group_name, self.settle)
    }

    /// Starts a new roll on `session` and returns where and how to throw each physical die.
    ///
    /// The launches are in the order the session expects motions on every tick.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rs_dice::apis::easy_dice::EasyDice;
    ///
    /// let dice = EasyDice::new();
    /// let mut session = dice.new_session("D6").unwrap();
    /// session.set_dice_count(2).unwrap();
    ///
    /// let launches = dice.roll(&mut session, &mut StdRng::seed_from_u64(3));
    /// assert_eq!(launches.len(), 2);
    /// ```
    #[cfg(feature = "throws")]
    pub fn roll<R: Rng>(&self, session: &mut RollSession, rng: &mut R) -> Vec<DieLaunch> {
        session.start_roll();
        ThrowGenerator::new(self.throws).launch_all(&session.rolled_dice(), rng)
    }
}
