use std::f64::consts::{PI, TAU};
use rand::Rng;
use crate::models::{cross_product, dot_product, vector_magnitude, Vector3};

/// Quaternion representation for 3D rotations; the orientation reported for each die
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl Quaternion {
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a new identity quaternion (no rotation)
    pub const fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Samples a rotation uniformly over SO(3) (Shoemake's subgroup algorithm).
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let u1: f64 = rng.random();
        let u2: f64 = rng.random();
        let u3: f64 = rng.random();

        let r1 = (1.0 - u1).sqrt();
        let r2 = u1.sqrt();
        let (s2, c2) = (TAU * u2).sin_cos();
        let (s3, c3) = (TAU * u3).sin_cos();

        Quaternion {
            w: r2 * c3,
            x: r1 * s2,
            y: r1 * c2,
            z: r2 * s3,
        }
    }

    pub fn is_near_identity(&self, epsilon: f64) -> bool {
        (self.w - 1.0).abs() < epsilon &&
            self.x.abs() < epsilon &&
            self.y.abs() < epsilon &&
            self.z.abs() < epsilon
    }

    /// Creates a quaternion from axis-angle representation
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let half_angle = angle / 2.0;
        let sin_half = half_angle.sin();
        let (ax, ay, az) = axis;
        let magnitude = (ax * ax + ay * ay + az * az).sqrt();

        if magnitude < 1e-10 {
            return Quaternion::identity();
        }

        let nx = ax / magnitude;
        let ny = ay / magnitude;
        let nz = az / magnitude;

        Quaternion {
            w: half_angle.cos(),
            x: nx * sin_half,
            y: ny * sin_half,
            z: nz * sin_half,
        }
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    ///
    /// Opposite directions get a half turn about an arbitrary perpendicular axis; a zero
    /// vector on either side gives the identity.
    pub fn rotation_between(from: Vector3, to: Vector3) -> Self {
        let from_len = vector_magnitude(from);
        let to_len = vector_magnitude(to);
        if from_len < 1e-10 || to_len < 1e-10 {
            return Quaternion::identity();
        }

        let cos_angle = (dot_product(from, to) / (from_len * to_len)).clamp(-1.0, 1.0);
        if cos_angle > 1.0 - 1e-12 {
            return Quaternion::identity();
        }
        if cos_angle < -1.0 + 1e-12 {
            let mut axis = cross_product(from, (1.0, 0.0, 0.0));
            if vector_magnitude(axis) < 1e-6 {
                axis = cross_product(from, (0.0, 0.0, 1.0));
            }
            return Quaternion::from_axis_angle(axis, PI);
        }

        Quaternion::from_axis_angle(cross_product(from, to), cos_angle.acos())
    }

    /// Creates a quaternion from Euler angles (roll about x, pitch about y, yaw about z)
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        // ZYX convention
        let cy = (yaw * 0.5).cos();
        let sy = (yaw * 0.5).sin();
        let cp = (pitch * 0.5).cos();
        let sp = (pitch * 0.5).sin();
        let cr = (roll * 0.5).cos();
        let sr = (roll * 0.5).sin();

        Quaternion {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }

    /// Returns the length/magnitude of the quaternion
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized version of the quaternion
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-10 {
            return Quaternion::identity();
        }
        Quaternion {
            w: self.w / mag,
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Multiplies two quaternions (composition of rotations, `other` applied first)
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// Returns the conjugate of the quaternion
    pub fn conjugate(&self) -> Quaternion {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Returns the inverse of the quaternion
    pub fn inverse(&self) -> Quaternion {
        let mag_squared = self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z;
        if mag_squared < 1e-10 {
            return Quaternion::identity();
        }

        let conj = self.conjugate();
        Quaternion {
            w: conj.w / mag_squared,
            x: conj.x / mag_squared,
            y: conj.y / mag_squared,
            z: conj.z / mag_squared,
        }
    }

    /// Rotates a vector using the quaternion
    pub fn rotate_vector(&self, vector: Vector3) -> Vector3 {
        let p = Quaternion {
            w: 0.0,
            x: vector.0,
            y: vector.1,
            z: vector.2,
        };

        // q * p * q^-1
        let q_normalized = self.normalized();
        let q_inv = q_normalized.conjugate();
        let rotated = q_normalized.multiply(&p).multiply(&q_inv);

        (rotated.x, rotated.y, rotated.z)
    }
}
