use crate::models::{l1_norm, Quaternion, Vector3};

/// State of one physical die as reported by the physics host on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DieMotion {
    pub rotation: Quaternion,
    pub linear_velocity: Vector3,
    pub angular_velocity: Vector3,
}

impl DieMotion {
    pub fn new(rotation: Quaternion, linear_velocity: Vector3, angular_velocity: Vector3) -> Self {
        Self { rotation, linear_velocity, angular_velocity }
    }

    /// A die lying still in the given orientation.
    pub fn at_rest(rotation: Quaternion) -> Self {
        Self {
            rotation,
            linear_velocity: (0.0, 0.0, 0.0),
            angular_velocity: (0.0, 0.0, 0.0),
        }
    }

    pub fn linear_speed(&self) -> f64 {
        l1_norm(self.linear_velocity)
    }

    pub fn angular_speed(&self) -> f64 {
        l1_norm(self.angular_velocity)
    }
}
