use crate::utils;
use crate::models::Vector3;

/// World vertical; the face whose normal is closest to it is the rolled face.
pub const WORLD_UP: Vector3 = (0.0, 1.0, 0.0);

/// Summed velocity below which dice count as resting.
pub const VELOCITY_SETTLE_THRESHOLD: f64 = 0.1;

/// Seconds of continuous rest required before a roll is read.
pub const SETTLE_DURATION: f64 = 1.0;

/// Slack when comparing the accumulated settle timer against the settle duration.
pub const SETTLE_TIME_EPSILON: f64 = 1e-9;

/// Largest number of dice groups a single roll may contain.
pub const MAX_DICE_COUNT: usize = 100;

/// Relative tolerance for unit-length and distinctness checks on face normals.
pub const NORMAL_TOLERANCE: f64 = 1e-4;

pub const DEFAULT_SETTLE_CONSTANTS: utils::SettleConstants = utils::SettleConstants {
    linear_velocity_threshold: VELOCITY_SETTLE_THRESHOLD,
    angular_velocity_threshold: VELOCITY_SETTLE_THRESHOLD,
    settle_duration: SETTLE_DURATION,
};

pub const DEFAULT_THROW_CONSTANTS: utils::ThrowConstants = utils::ThrowConstants {
    spawn_half_extent: 1.0,
    spawn_height: 1.5,
    lateral_impulse: 2.0,
    vertical_impulse: 6.0,
    torque_half_range: 4.0,
};
