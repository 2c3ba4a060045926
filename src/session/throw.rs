// src/session/throw.rs

use std::f64::consts::TAU;
use rand::Rng;
use crate::dice::DieType;
use crate::models::{Quaternion, Vector3};
use crate::utils::ThrowConstants;

/// Initial state the physics host gives one thrown die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieLaunch {
    pub die_type: &'static DieType,
    pub position: Vector3,
    pub rotation: Quaternion,
    /// Impulse applied at the centre of mass when the die is released.
    pub impulse: Vector3,
    pub torque: Vector3,
}

/// Draws random spawn placements and kicks for thrown dice.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowGenerator {
    constants: ThrowConstants,
}

/// Uniform in `[-half_range, half_range)`, or 0 for a degenerate range.
fn symmetric<R: Rng>(rng: &mut R, half_range: f64) -> f64 {
    if half_range > 0.0 {
        rng.random_range(-half_range..half_range)
    } else {
        0.0
    }
}

impl ThrowGenerator {
    pub fn new(constants: ThrowConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &ThrowConstants {
        &self.constants
    }

    pub fn launch<R: Rng>(&self, die_type: &'static DieType, rng: &mut R) -> DieLaunch {
        let c = &self.constants;

        let position = (
            symmetric(rng, c.spawn_half_extent),
            c.spawn_height,
            symmetric(rng, c.spawn_half_extent),
        );
        let rotation = Quaternion::from_euler(
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
        );
        let impulse = (
            symmetric(rng, c.lateral_impulse),
            c.vertical_impulse,
            symmetric(rng, c.lateral_impulse),
        );
        let torque = (
            symmetric(rng, c.torque_half_range),
            symmetric(rng, c.torque_half_range),
            symmetric(rng, c.torque_half_range),
        );

        DieLaunch { die_type, position, rotation, impulse, torque }
    }

    /// One launch per die, in the given order.
    pub fn launch_all<R: Rng>(&self, dice: &[&'static DieType], rng: &mut R) -> Vec<DieLaunch> {
        dice.iter().map(|die| self.launch(*die, &mut *rng)).collect()
    }
}
