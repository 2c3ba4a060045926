// src/resolution/face_resolver.rs

use crate::dice::DieFace;
use crate::models::{dot_product, Quaternion, Vector3};
use crate::utils::{DiceError, WORLD_UP};

/// Finds the face of a die pointing most nearly up.
///
/// World up is brought into the die's own frame with the inverse rotation and compared against
/// the unrotated normals, which is equivalent to rotating every normal into world space.
/// The face with the strictly largest dot product wins; exact ties go to the first face in the
/// table.
///
/// # Errors
/// Returns `EmptyFaceTable` when `faces` is empty.
///
/// # Example
/// ```
/// use rs_dice::dice::D6;
/// use rs_dice::models::Quaternion;
/// use rs_dice::resolution::resolve_face;
///
/// let face = resolve_face(&Quaternion::identity(), D6.faces).unwrap();
/// assert_eq!(face.display_value, "1");
/// ```
pub fn resolve_face<'a>(rotation: &Quaternion, faces: &'a [DieFace]) -> Result<&'a DieFace, DiceError> {
    resolve_face_towards(rotation, faces, WORLD_UP)
}

/// Same as [`resolve_face`] with a caller-supplied world up vector.
pub fn resolve_face_towards<'a>(
    rotation: &Quaternion,
    faces: &'a [DieFace],
    up: Vector3,
) -> Result<&'a DieFace, DiceError> {
    let reference_normal = rotation.inverse().rotate_vector(up);

    let mut best: Option<(&'a DieFace, f64)> = None;
    for face in faces {
        let alignment = dot_product(reference_normal, face.normal);
        match best {
            Some((_, best_alignment)) if alignment > best_alignment => best = Some((face, alignment)),
            None => best = Some((face, alignment)),
            _ => {}
        }
    }

    best.map(|(face, _)| face).ok_or(DiceError::EmptyFaceTable)
}
