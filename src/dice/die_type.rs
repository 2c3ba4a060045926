use std::borrow::Cow;
use approx::{abs_diff_eq, relative_eq};
use crate::dice::DieFace;
use crate::models::vector_magnitude;
use crate::utils::{DiceError, NORMAL_TOLERANCE};

/// Side counts of the polyhedra the catalog knows how to describe.
pub const SUPPORTED_SIDE_COUNTS: [usize; 6] = [4, 6, 8, 10, 12, 20];

/// An immutable catalog entry describing one kind of physical die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieType {
    pub name: &'static str,
    pub faces: &'static [DieFace],
    /// Whether labels like `"6"` and `"9"` get a trailing period when printed.
    pub marks_ambiguous_labels: bool,
}

impl DieType {
    pub const fn new(name: &'static str, faces: &'static [DieFace], marks_ambiguous_labels: bool) -> Self {
        Self { name, faces, marks_ambiguous_labels }
    }

    pub fn side_count(&self) -> usize {
        self.faces.len()
    }

    /// Label for `face` as it is printed on this die type.
    pub fn face_label(&self, face: &DieFace) -> Cow<'static, str> {
        face.rendered_label(self.marks_ambiguous_labels)
    }

    pub fn face_by_label(&self, display_value: &str) -> Option<&'static DieFace> {
        let faces: &'static [DieFace] = self.faces;
        faces.iter().find(|face| face.display_value == display_value)
    }

    pub fn validate(&self) -> Result<(), DiceError> {
        validate_face_table(self.faces)
    }
}

/// Checks that a face table describes a supported polyhedron.
///
/// # Errors
/// Returns `InvalidGeometry` when the side count is unsupported, a normal is not unit length
/// within `NORMAL_TOLERANCE`, or two normals coincide.
pub fn validate_face_table(faces: &[DieFace]) -> Result<(), DiceError> {
    if !SUPPORTED_SIDE_COUNTS.contains(&faces.len()) {
        return Err(DiceError::InvalidGeometry(format!("unsupported side count {}", faces.len())));
    }

    for face in faces {
        let length = vector_magnitude(face.normal);
        if !relative_eq!(length, 1.0, max_relative = NORMAL_TOLERANCE) {
            return Err(DiceError::InvalidGeometry(format!(
                "normal of face {} has length {}",
                face.display_value, length
            )));
        }
    }

    for (i, a) in faces.iter().enumerate() {
        for b in &faces[i + 1..] {
            let same = abs_diff_eq!(a.normal.0, b.normal.0, epsilon = NORMAL_TOLERANCE)
                && abs_diff_eq!(a.normal.1, b.normal.1, epsilon = NORMAL_TOLERANCE)
                && abs_diff_eq!(a.normal.2, b.normal.2, epsilon = NORMAL_TOLERANCE);
            if same {
                return Err(DiceError::InvalidGeometry(format!(
                    "faces {} and {} share a normal",
                    a.display_value, b.display_value
                )));
            }
        }
    }

    Ok(())
}
