// src/resolution/settle_detector.rs

use log::{debug, info, warn};
use crate::models::DieMotion;
use crate::utils::{SettleConstants, SETTLE_TIME_EPSILON};

/// Decides when simulated dice have stopped moving.
///
/// Each tick the L1 norms of all linear velocities and of all angular velocities are summed.
/// While both sums stay below their thresholds the tick's elapsed time is added to a timer
/// (clamped to the settle duration); any tick at or above a threshold resets it. When the timer
/// reaches the settle duration the detector fires once and then ignores ticks until
/// [`SettleDetector::clear`] is called.
#[derive(Debug, Clone)]
pub struct SettleDetector {
    constants: SettleConstants,
    settle_timer: f64,
    fired: bool,
}

impl Default for SettleDetector {
    fn default() -> Self {
        Self::new(SettleConstants::default())
    }
}

impl SettleDetector {
    pub fn new(constants: SettleConstants) -> Self {
        Self {
            constants,
            settle_timer: 0.0,
            fired: false,
        }
    }

    pub fn constants(&self) -> &SettleConstants {
        &self.constants
    }

    pub fn settle_timer(&self) -> f64 {
        self.settle_timer
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Resets the timer and re-arms the one-shot.
    pub fn clear(&mut self) {
        self.settle_timer = 0.0;
        self.fired = false;
    }

    /// Feeds one tick. Returns true on the single tick at which the dice settle.
    ///
    /// An empty `motions` slice never settles; it clears the detector instead.
    pub fn observe(&mut self, dt: f64, motions: &[DieMotion]) -> bool {
        if motions.is_empty() {
            self.clear();
            return false;
        }
        if self.fired {
            return false;
        }

        let linear_sum: f64 = motions.iter().map(DieMotion::linear_speed).sum();
        let angular_sum: f64 = motions.iter().map(DieMotion::angular_speed).sum();

        if !self.constants.is_at_rest(linear_sum, angular_sum) {
            if self.settle_timer > 0.0 {
                debug!("Dice moving again (v={:.3}, w={:.3}), settle timer reset", linear_sum, angular_sum);
            }
            self.settle_timer = 0.0;
            return false;
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("Ignoring invalid tick duration {:?}", dt);
            0.0
        };

        let cutoff = self.constants.settle_duration;
        self.settle_timer = (self.settle_timer + dt).min(cutoff);

        if self.settle_timer >= cutoff - SETTLE_TIME_EPSILON {
            self.fired = true;
            info!("{} dice settled after {:.2}s at rest", motions.len(), cutoff);
            return true;
        }

        false
    }
}
