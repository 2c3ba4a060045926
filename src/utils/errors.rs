use std::fmt;
use std::error::Error;

/// Broad category of a [`DiceError`].
///
/// `NotFound` and `InvalidArgument` come from user input and are recoverable by keeping the
/// previous selection. `InvalidState` means the caller broke a contract of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    InvalidState,
}

/// Represents errors that can occur while resolving or aggregating dice rolls.
#[derive(Debug, Clone, PartialEq)]
pub enum DiceError {
    /// No die type with the given name exists in the catalog.
    UnknownDieType(String),
    /// No dice group with the given name exists in the catalog.
    UnknownDiceGroup(String),
    /// The requested dice count is not a positive integer.
    InvalidDiceCount(String),
    /// The number of motions supplied for a tick does not match the number of physical dice.
    MotionCountMismatch { expected: usize, actual: usize },
    /// The number of resolved faces does not match the component count of a dice group.
    ComponentCountMismatch { expected: usize, actual: usize },
    /// A face table violates the geometric invariants (unit, distinct normals).
    InvalidGeometry(String),
    /// Face resolution was requested against an empty face table.
    EmptyFaceTable,
    /// Resolution was requested while no dice are being tracked.
    NoTrackedDice,
}

impl DiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiceError::UnknownDieType(_) | DiceError::UnknownDiceGroup(_) => ErrorKind::NotFound,
            DiceError::InvalidDiceCount(_)
            | DiceError::MotionCountMismatch { .. }
            | DiceError::ComponentCountMismatch { .. }
            | DiceError::InvalidGeometry(_)
            | DiceError::EmptyFaceTable => ErrorKind::InvalidArgument,
            DiceError::NoTrackedDice => ErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for DiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiceError::UnknownDieType(name) => write!(f, "Unknown die type: {}", name),
            DiceError::UnknownDiceGroup(name) => write!(f, "Unknown dice group: {}", name),
            DiceError::InvalidDiceCount(input) => write!(f, "Invalid dice count: {:?}", input),
            DiceError::MotionCountMismatch { expected, actual } => {
                write!(f, "Expected motion for {} dice, got {}", expected, actual)
            }
            DiceError::ComponentCountMismatch { expected, actual } => {
                write!(f, "Dice group expects {} resolved faces, got {}", expected, actual)
            }
            DiceError::InvalidGeometry(msg) => write!(f, "Invalid face geometry: {}", msg),
            DiceError::EmptyFaceTable => write!(f, "Cannot resolve a face from an empty face table"),
            DiceError::NoTrackedDice => write!(f, "No dice are being tracked"),
        }
    }
}


impl Error for DiceError {}
