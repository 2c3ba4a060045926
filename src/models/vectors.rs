use crate::utils::DiceError;

/// A 3D vector as an `(x, y, z)` tuple.
pub type Vector3 = (f64, f64, f64);

/// Calculates the dot product of two 3D vectors.
///
/// # Example
/// ```
/// use rs_dice::models::dot_product;
///
/// assert_eq!(dot_product((1.0, 2.0, 3.0), (4.0, 5.0, 6.0)), 32.0);
/// ```
pub fn dot_product(v1: Vector3, v2: Vector3) -> f64 {
    v1.0 * v2.0 + v1.1 * v2.1 + v1.2 * v2.2
}

pub fn cross_product(v1: Vector3, v2: Vector3) -> Vector3 {
    (
        v1.1 * v2.2 - v1.2 * v2.1,
        v1.2 * v2.0 - v1.0 * v2.2,
        v1.0 * v2.1 - v1.1 * v2.0,
    )
}

/// Calculates the Euclidean length of a 3D vector.
pub fn vector_magnitude(v: Vector3) -> f64 {
    (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt()
}

/// Sum of absolute components.
///
/// Used as a cheap speed estimate when gating on a threshold.
///
/// # Example
/// ```
/// use rs_dice::models::l1_norm;
///
/// assert_eq!(l1_norm((-1.0, 2.0, -0.5)), 3.5);
/// ```
pub fn l1_norm(v: Vector3) -> f64 {
    v.0.abs() + v.1.abs() + v.2.abs()
}

/// Normalizes a 3D vector (makes it a unit vector).
///
/// # Errors
/// Returns `InvalidGeometry` for the zero vector.
pub fn normalize_vector(v: Vector3) -> Result<Vector3, DiceError> {
    let magnitude = vector_magnitude(v);

    if magnitude == 0.0 {
        return Err(DiceError::InvalidGeometry("Cannot normalize a zero vector".to_string()));
    }

    Ok((v.0 / magnitude, v.1 / magnitude, v.2 / magnitude))
}

pub fn scale_vector(v: Vector3, factor: f64) -> Vector3 {
    (v.0 * factor, v.1 * factor, v.2 * factor)
}

pub fn negate_vector(v: Vector3) -> Vector3 {
    (-v.0, -v.1, -v.2)
}
