// src/utils/constants_config.rs
use crate::utils::{
    DEFAULT_SETTLE_CONSTANTS,
    DEFAULT_THROW_CONSTANTS,
};

/// Thresholds that decide when simulated dice have stopped moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleConstants {
    /// Upper bound (exclusive) on the summed L1 norm of linear velocities.
    pub linear_velocity_threshold: f64,
    /// Upper bound (exclusive) on the summed L1 norm of angular velocities.
    pub angular_velocity_threshold: f64,
    /// Seconds the dice must stay below both thresholds before the roll settles.
    pub settle_duration: f64,
}


impl Default for SettleConstants {
    fn default() -> Self {
        DEFAULT_SETTLE_CONSTANTS
    }
}

impl SettleConstants {
    pub fn new(
        linear_velocity_threshold: Option<f64>,
        angular_velocity_threshold: Option<f64>,
        settle_duration: Option<f64>,
    ) -> Self {
        let default = DEFAULT_SETTLE_CONSTANTS;
        Self {
            linear_velocity_threshold: linear_velocity_threshold.unwrap_or(default.linear_velocity_threshold),
            angular_velocity_threshold: angular_velocity_threshold.unwrap_or(default.angular_velocity_threshold),
            settle_duration: settle_duration.unwrap_or(default.settle_duration),
        }
    }

    /// Returns true when both velocity sums are strictly below their thresholds.
    pub fn is_at_rest(&self, linear_sum: f64, angular_sum: f64) -> bool {
        linear_sum < self.linear_velocity_threshold && angular_sum < self.angular_velocity_threshold
    }
}

/// Ranges used to generate the initial placement and kick of a thrown die.
///
/// Every randomised component is drawn from a half-open interval `[-r, r)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowConstants {
    /// Spawn x and z are drawn from `[-spawn_half_extent, spawn_half_extent)`.
    pub spawn_half_extent: f64,
    pub spawn_height: f64,
    /// Impulse x and z are drawn from `[-lateral_impulse, lateral_impulse)`.
    pub lateral_impulse: f64,
    pub vertical_impulse: f64,
    /// Each torque component is drawn from `[-torque_half_range, torque_half_range)`.
    pub torque_half_range: f64,
}

impl Default for ThrowConstants {
    fn default() -> Self {
        DEFAULT_THROW_CONSTANTS
    }
}

impl ThrowConstants {
    pub fn new(
        spawn_half_extent: Option<f64>,
        spawn_height: Option<f64>,
        lateral_impulse: Option<f64>,
        vertical_impulse: Option<f64>,
        torque_half_range: Option<f64>,
    ) -> Self {
        let default = DEFAULT_THROW_CONSTANTS;
        Self {
            spawn_half_extent: spawn_half_extent.unwrap_or(default.spawn_half_extent),
            spawn_height: spawn_height.unwrap_or(default.spawn_height),
            lateral_impulse: lateral_impulse.unwrap_or(default.lateral_impulse),
            vertical_impulse: vertical_impulse.unwrap_or(default.vertical_impulse),
            torque_half_range: torque_half_range.unwrap_or(default.torque_half_range),
        }
    }
}
