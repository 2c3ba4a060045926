use std::borrow::Cow;
use crate::models::Vector3;

/// One physical face of a die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieFace {
    /// Label shown to the user, e.g. `"6"`, or `"0"` on the ten-sided die.
    pub display_value: &'static str,
    /// Value counted towards totals; the `"0"` face of a D10 counts 10.
    pub numeric_value: u32,
    /// Outward unit vector in the die's unrotated frame.
    pub normal: Vector3,
}

impl DieFace {
    pub const fn new(display_value: &'static str, numeric_value: u32, normal: Vector3) -> Self {
        Self { display_value, numeric_value, normal }
    }

    /// Same label and value with a different normal.
    pub fn with_normal(&self, normal: Vector3) -> Self {
        Self { normal, ..*self }
    }

    /// Label as printed on the die, with a trailing period when `mark_ambiguous` is set and the
    /// label reads the same upside down as another number.
    pub fn rendered_label(&self, mark_ambiguous: bool) -> Cow<'static, str> {
        if mark_ambiguous && is_ambiguous_label(self.display_value) {
            Cow::Owned(format!("{}.", self.display_value))
        } else {
            Cow::Borrowed(self.display_value)
        }
    }
}

/// True for labels made only of `6` and `9`, which turn into each other under a half turn.
///
/// # Example
/// ```
/// use rs_dice::dice::is_ambiguous_label;
///
/// assert!(is_ambiguous_label("69"));
/// assert!(!is_ambiguous_label("16"));
/// ```
pub fn is_ambiguous_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c == '6' || c == '9')
}
